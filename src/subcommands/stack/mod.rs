//! Subcommands operating on the stack as a whole.

mod rebase;
mod repair;
mod series;

pub use rebase::RebaseCmd;
pub use repair::RepairCmd;
pub use series::SeriesCmd;
