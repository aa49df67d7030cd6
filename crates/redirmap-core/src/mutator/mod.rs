//! Validated, serialized mutations of the rule file.
//!
//! Every mutation is one locked load-modify-save cycle with exactly one save.
//! Validation happens before the lock is taken; a batch with nothing valid in
//! it never touches the file.

mod error;


use crate::input::{normalize_host, normalize_target, sanitize_url_text, split_batch_line};
use crate::rule::RuleSet;
use crate::store::RuleStore;

pub use error::{MutateError, ValidationError};

/// Admin-side entry point for changing rules.
#[derive(Debug)]
pub struct RuleMutator {
    store: RuleStore,
}

impl RuleMutator {
    pub fn new(store: RuleStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    /// Add or replace one rule.
    ///
    /// Both inputs are trimmed and sanitized; the host is lowercased. The new
    /// value is a bare target string and fully replaces any previous value,
    /// including one stored under a differently-cased key.
    pub fn add_one(&self, host: &str, target: &str) -> Result<(), MutateError> {
        let host = normalize_host(host).ok_or(ValidationError::EmptyHost)?;
        let target = normalize_target(target).ok_or(ValidationError::EmptyTarget)?;

        self.modify(|rules| {
            rules.insert_normalized(&host, target.as_str());
        })?;
        tracing::info!(%host, %target, "rule added");
        Ok(())
    }

    /// Add or replace every valid `<host> <target>` line of `raw` in one save.
    ///
    /// Lines with fewer than two tokens, or that sanitize to nothing, are
    /// skipped. Returns the number of accepted lines.
    pub fn add_batch(&self, raw: &str) -> Result<usize, MutateError> {
        let pairs = parse_batch(raw);
        if pairs.is_empty() {
            return Err(ValidationError::NoValidLines.into());
        }

        self.modify(|rules| {
            for (host, target) in &pairs {
                rules.insert_normalized(host, target.as_str());
            }
        })?;
        tracing::info!(count = pairs.len(), "batch rules added");
        Ok(pairs.len())
    }

    /// Delete the rule stored under exactly `host` (no normalization).
    ///
    /// Returns `Ok(false)` when no such key exists; the file is not rewritten.
    pub fn delete_one(&self, host: &str) -> Result<bool, MutateError> {
        let removed = self.modify_if(|rules| rules.remove(host).is_some())?;
        if removed {
            tracing::info!(%host, "rule deleted");
        } else {
            tracing::info!(%host, "delete: no such rule");
        }
        Ok(removed)
    }

    /// Delete every listed host that exists, in one save.
    ///
    /// Candidates are trimmed and sanitized (not lowercased) before matching.
    /// Unknown hosts are ignored. Returns the number actually removed; zero
    /// leaves the file untouched.
    pub fn delete_batch<S: AsRef<str>>(&self, hosts: &[S]) -> Result<usize, MutateError> {
        let candidates: Vec<String> = hosts
            .iter()
            .map(|h| sanitize_url_text(h.as_ref().trim()))
            .filter(|h| !h.is_empty())
            .collect();
        if candidates.is_empty() {
            return Ok(0);
        }

        let mut removed = 0;
        self.modify_if(|rules| {
            removed = remove_hosts(rules, &candidates);
            removed > 0
        })?;
        tracing::info!(removed, requested = hosts.len(), "batch rules deleted");
        Ok(removed)
    }

    /// Current rules, freshly loaded. For listing, export and probing.
    pub fn list_all(&self) -> RuleSet {
        self.store.load()
    }

    fn modify(&self, f: impl FnOnce(&mut RuleSet)) -> Result<(), MutateError> {
        self.modify_if(|rules| {
            f(rules);
            true
        })
        .map(|_| ())
    }

    /// Locked load-modify-save. `f` returns whether anything changed; the file
    /// is only written when it did.
    fn modify_if(&self, f: impl FnOnce(&mut RuleSet) -> bool) -> Result<bool, MutateError> {
        let _guard = self.store.lock()?;
        let mut rules = self.store.load_or_init();
        if !f(&mut rules) {
            return Ok(false);
        }
        if let Err(e) = self.store.save(&rules) {
            tracing::error!("rule change not saved: {}", e);
            return Err(e.into());
        }
        Ok(true)
    }
}

/// Valid `(host, target)` pairs of a batch, normalized, in input order.
fn parse_batch(raw: &str) -> Vec<(String, String)> {
    raw.lines()
        .filter_map(split_batch_line)
        .filter_map(|(host, target)| Some((normalize_host(host)?, normalize_target(target)?)))
        .collect()
}

/// Remove every exact match of `hosts`; returns how many were present.
fn remove_hosts(rules: &mut RuleSet, hosts: &[String]) -> usize {
    hosts.iter().filter(|host| rules.remove(host).is_some()).count()
}
