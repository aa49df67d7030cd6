//! Host → target resolution for the redirect front door.
//!
//! `resolve` and `classify` are pure lookups over a rule snapshot. The
//! [`Resolver`] handle loads a fresh snapshot per request and applies the
//! configured host matching policy.

use serde::{Deserialize, Serialize};

use crate::rule::RuleSet;
use crate::store::RuleStore;

/// Outcome of looking up a request host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Redirect to this target.
    Redirect(String),
    /// No rule for the host.
    Unconfigured,
    /// A rule exists but carries no usable target.
    Misconfigured,
}

impl Resolution {
    pub fn target(&self) -> Option<&str> {
        match self {
            Resolution::Redirect(t) => Some(t),
            Resolution::Unconfigured | Resolution::Misconfigured => None,
        }
    }
}

/// How the request host is compared against stored (lowercase) keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostMatch {
    /// Compare the host verbatim. A mixed-case request host will not match.
    #[default]
    Exact,
    /// Lowercase the request host before comparing.
    CaseInsensitive,
}

/// Target for `host`, matched exactly against stored keys.
///
/// The host is not re-normalized here. Records without a usable `target`
/// resolve to `None`, same as a missing rule.
pub fn resolve<'a>(host: &str, rules: &'a RuleSet) -> Option<&'a str> {
    rules.get(host)?.target()
}

/// Like [`resolve`], but tells a missing rule apart from an unusable one.
pub fn classify(host: &str, rules: &RuleSet) -> Resolution {
    match rules.get(host) {
        None => Resolution::Unconfigured,
        Some(value) => match value.target() {
            Some(t) => Resolution::Redirect(t.to_string()),
            None => Resolution::Misconfigured,
        },
    }
}

/// Front-door resolver: one fresh load per lookup, no caching.
#[derive(Debug)]
pub struct Resolver {
    store: RuleStore,
    host_match: HostMatch,
}

impl Resolver {
    pub fn new(store: RuleStore, host_match: HostMatch) -> Self {
        Self { store, host_match }
    }

    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    /// Resolve a raw request host.
    pub fn lookup(&self, host: &str) -> Resolution {
        let rules = self.store.load();
        let resolution = match self.host_match {
            HostMatch::Exact => classify(host, &rules),
            HostMatch::CaseInsensitive => classify(&host.to_ascii_lowercase(), &rules),
        };
        match &resolution {
            Resolution::Redirect(target) => tracing::debug!(%host, %target, "host resolved"),
            Resolution::Unconfigured => tracing::debug!(%host, "host not configured"),
            Resolution::Misconfigured => tracing::warn!(%host, "rule has no usable target"),
        }
        resolution
    }
}
