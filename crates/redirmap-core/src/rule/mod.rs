//! Rule data model.
//!
//! A rule maps a host to a redirect target. Values come in two shapes on disk
//! (bare target string, or a record with a `target` field plus metadata); both
//! are read through [`RuleValue::target`].

mod set;
mod value;

pub use set::RuleSet;
pub use value::{RuleRecord, RuleValue};
