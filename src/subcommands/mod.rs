//! The subcommands for the `sg` application.

use crate::{ctx::SgContext, errors::SgResult};
use clap::Subcommand;
use patch::{DiscardCmd, GotoCmd, MarkCmd, RefreshCmd, ShowCmd, UnmarkCmd};
use stack::{RebaseCmd, RepairCmd, SeriesCmd};

mod patch;
mod stack;

/// The subcommands for the `sg` application.
#[derive(Debug, Clone, Eq, PartialEq, Subcommand)]
pub enum Subcommands {
    /// Print the patch series of the current branch.
    #[clap(aliases = ["l", "ls"])]
    Series(SeriesCmd),
    /// Refresh a patch with the changes in the working tree.
    #[clap(alias = "r")]
    Refresh(RefreshCmd),
    /// Repair the StGit metadata after `git` commands were run directly.
    Repair(RepairCmd),
    /// Rebase the patch stack onto a new base.
    Rebase(RebaseCmd),
    /// Set the current patch, applying or unapplying patches as needed.
    #[clap(alias = "g")]
    Goto(GotoCmd),
    /// Discard a patch, deleting it from the series.
    #[clap(alias = "d")]
    Discard(DiscardCmd),
    /// Show the commit of a patch.
    Show(ShowCmd),
    /// Mark a patch as the default target for subsequent patch commands.
    #[clap(alias = "m")]
    Mark(MarkCmd),
    /// Clear the patch mark.
    Unmark(UnmarkCmd),
}

impl Subcommands {
    /// Run the subcommand with the given context.
    pub async fn run(self, ctx: SgContext) -> SgResult<()> {
        match self {
            Self::Series(args) => args.run(ctx),
            Self::Refresh(args) => args.run(ctx),
            Self::Repair(args) => args.run(ctx),
            Self::Rebase(args) => args.run(ctx),
            Self::Goto(args) => args.run(ctx),
            Self::Discard(args) => args.run(ctx),
            Self::Show(args) => args.run(ctx),
            Self::Mark(args) => args.run(ctx),
            Self::Unmark(args) => args.run(ctx),
        }
    }
}
