//! Durable rule storage: a single JSON file.
//!
//! Reads fail open: a missing, unreadable or corrupt file loads as an empty
//! rule set and the problem is logged, so the redirect path keeps serving.
//! Writes fail closed: `save` reports every error and never leaves a partial
//! file behind (temp file + rename).
//!
//! Mutations must hold [`RuleStore::lock`] across their whole
//! load-modify-save cycle.

mod error;
mod lock;
mod persist;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::rule::RuleSet;

pub use error::StoreError;
pub use lock::StoreGuard;

/// Suffix of the sidecar file used for cross-process write locking.
pub const LOCK_SUFFIX: &str = ".lock";

/// Handle to one backing rules file.
///
/// Cheap to construct. Share one handle between threads (e.g. in an `Arc`)
/// or open several on the same path; both are serialized by `lock`.
#[derive(Debug)]
pub struct RuleStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl RuleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the rules file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the sidecar lock file: `<rules file>.lock`.
    pub fn lock_path(&self) -> PathBuf {
        let mut o = self.path.as_os_str().to_owned();
        o.push(LOCK_SUFFIX);
        PathBuf::from(o)
    }

    /// Load the current rules. Never fails; see the module docs.
    pub fn load(&self) -> RuleSet {
        self.read().unwrap_or_default()
    }

    /// Like [`load`](Self::load), but writes an empty `{}` file when none
    /// exists so later reads see a valid file. Used on the mutation path.
    ///
    /// An unreadable or corrupt file also loads as empty here, so whatever the
    /// caller saves next replaces it and its old contents are lost.
    pub fn load_or_init(&self) -> RuleSet {
        match self.read() {
            Some(rules) => rules,
            None if !self.path.exists() => {
                match self.save(&RuleSet::new()) {
                    Ok(()) => tracing::info!(path = %self.path.display(), "created empty rules file"),
                    Err(e) => tracing::warn!("could not create empty rules file: {}", e),
                }
                RuleSet::new()
            }
            None => {
                tracing::error!(
                    path = %self.path.display(),
                    "rules file unusable; the next saved change replaces it"
                );
                RuleSet::new()
            }
        }
    }

    /// Write the full rule set, atomically replacing the previous file.
    pub fn save(&self, rules: &RuleSet) -> Result<(), StoreError> {
        let bytes = persist::encode(rules)?;
        persist::write_atomic(&self.path, &bytes)?;
        tracing::debug!(path = %self.path.display(), count = rules.len(), "saved rules");
        Ok(())
    }

    /// Take the exclusive write lock for a load-modify-save cycle.
    pub fn lock(&self) -> Result<StoreGuard<'_>, StoreError> {
        lock::acquire(&self.write_lock, &self.lock_path())
    }

    /// `None` when the file is missing, unreadable or invalid (logged).
    fn read(&self) -> Option<RuleSet> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "rules file not found");
                return None;
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), "cannot read rules file: {}", e);
                return None;
            }
        };
        match persist::decode(&bytes) {
            Ok(rules) => {
                tracing::debug!(path = %self.path.display(), count = rules.len(), "loaded rules");
                Some(rules)
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), "cannot decode rules file: {}", e);
                None
            }
        }
    }
}
