//! A single rule value: bare target string or structured record.

use serde::Serialize;
use serde_json::{Map, Value};

/// Structured rule record. `target` is the only field the engine reads; any
/// other fields (display labels, notes) are carried through unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RuleRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Value stored under a host key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RuleValue {
    /// Target URL only. This is the shape the mutator writes.
    Bare(String),
    /// Record with a `target` field and optional metadata.
    Record(RuleRecord),
}

impl RuleValue {
    /// The effective redirect target, if this value carries a usable one.
    pub fn target(&self) -> Option<&str> {
        let target = match self {
            RuleValue::Bare(t) => t.as_str(),
            RuleValue::Record(r) => r.target.as_deref()?,
        };
        (!target.trim().is_empty()).then_some(target)
    }

    /// Convert one persisted JSON value.
    ///
    /// Strings become `Bare`, objects become `Record`. A non-string `target`
    /// inside an object stays in `extra` so it is written back untouched.
    /// Any other JSON type yields `None`.
    pub(crate) fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(RuleValue::Bare(s)),
            Value::Object(mut extra) => {
                let target = match extra.remove("target") {
                    Some(Value::String(t)) => Some(t),
                    Some(other) => {
                        extra.insert("target".to_string(), other);
                        None
                    }
                    None => None,
                };
                Some(RuleValue::Record(RuleRecord { target, extra }))
            }
            _ => None,
        }
    }
}

impl From<String> for RuleValue {
    fn from(target: String) -> Self {
        RuleValue::Bare(target)
    }
}

impl From<&str> for RuleValue {
    fn from(target: &str) -> Self {
        RuleValue::Bare(target.to_string())
    }
}
