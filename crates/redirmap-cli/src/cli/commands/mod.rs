//! CLI command handlers. Each command is in its own file.

mod add;
mod batch_add;
mod check;
mod export;
mod list;
mod remove;
mod remove_many;
mod resolve;

pub use add::run_add;
pub use batch_add::run_batch_add;
pub use check::run_check;
pub use export::run_export;
pub use list::run_list;
pub use remove::run_remove;
pub use remove_many::run_remove_many;
pub use resolve::run_resolve;
