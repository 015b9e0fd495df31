//! CLI command handlers, one file per command.

mod inspect;
mod remove;

pub use inspect::run_inspect;
pub use remove::run_remove;
