//! Insertion-ordered host → rule map with JSON (de)serialization.

use indexmap::IndexMap;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RuleValue;

/// The full set of rules, keyed by host.
///
/// Keys are stored exactly as given; the mutator lowercases them before
/// insertion. Iteration follows insertion order, and overwriting an existing
/// key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    entries: IndexMap<String, RuleValue>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact, case-sensitive key lookup.
    pub fn get(&self, host: &str) -> Option<&RuleValue> {
        self.entries.get(host)
    }

    pub fn contains(&self, host: &str) -> bool {
        self.entries.contains_key(host)
    }

    /// Insert or fully replace the value for `host`. Returns the previous value.
    pub fn insert(&mut self, host: impl Into<String>, value: impl Into<RuleValue>) -> Option<RuleValue> {
        self.entries.insert(host.into(), value.into())
    }

    /// Insert under the lowercased `host`, first dropping any key that differs
    /// from it only by ASCII case. The new entry takes the position of the
    /// first key it replaces. Returns the last replaced value.
    pub fn insert_normalized(&mut self, host: &str, value: impl Into<RuleValue>) -> Option<RuleValue> {
        let host = host.to_ascii_lowercase();
        let mut slot = None;
        let mut previous = None;
        while let Some(i) = self
            .entries
            .keys()
            .position(|k| *k != host && k.eq_ignore_ascii_case(&host))
        {
            if let Some((old_host, old)) = self.entries.shift_remove_index(i) {
                tracing::info!(%old_host, %host, "replacing rule that differs only by case");
                slot.get_or_insert(i);
                previous = Some(old);
            }
        }
        match slot {
            Some(i) if !self.entries.contains_key(&host) => {
                self.entries.shift_insert(i, host, value.into());
                previous
            }
            _ => self.entries.insert(host, value.into()).or(previous),
        }
    }

    /// Remove `host` (exact match), preserving the order of remaining entries.
    pub fn remove(&mut self, host: &str) -> Option<RuleValue> {
        self.entries.shift_remove(host)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries that carry a usable target, as `(host, target)` pairs.
    pub fn targets(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter_map(|(host, value)| value.target().map(|t| (host, t)))
    }
}

impl<K: Into<String>, V: Into<RuleValue>> FromIterator<(K, V)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = RuleSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

impl Serialize for RuleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter())
    }
}

impl<'de> Deserialize<'de> for RuleSet {
    /// Accepts a JSON object. Entries whose value is neither a string nor an
    /// object are dropped with a warning rather than failing the whole set.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut entries = IndexMap::with_capacity(raw.len());
        for (host, value) in raw {
            match RuleValue::from_json(value) {
                Some(v) => {
                    entries.insert(host, v);
                }
                None => tracing::warn!(%host, "ignoring rule with unsupported value type"),
            }
        }
        Ok(Self { entries })
    }
}
