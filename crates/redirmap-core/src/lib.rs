pub mod config;
pub mod logging;

pub mod export;
pub mod input;
pub mod mutator;
pub mod probe;
pub mod resolver;
pub mod rule;
pub mod store;

pub use mutator::{MutateError, RuleMutator, ValidationError};
pub use resolver::{classify, resolve, HostMatch, Resolution, Resolver};
pub use rule::{RuleRecord, RuleSet, RuleValue};
pub use store::{RuleStore, StoreError};
