//! Subcommands addressing a single patch.

mod discard;
mod goto;
mod mark;
mod refresh;
mod show;
mod unmark;

pub use discard::DiscardCmd;
pub use goto::GotoCmd;
pub use mark::MarkCmd;
pub use refresh::RefreshCmd;
pub use show::ShowCmd;
pub use unmark::UnmarkCmd;
