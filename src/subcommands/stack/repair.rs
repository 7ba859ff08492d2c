//! `repair` subcommand.

use crate::{ctx::SgContext, errors::SgResult, stg};
use clap::Args;

/// CLI arguments for the `repair` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct RepairCmd;

impl RepairCmd {
    /// Run the `repair` subcommand.
    pub fn run(self, ctx: SgContext) -> SgResult<()> {
        stg::run_stg_captured(&["repair"], ctx.workdir()?)?;

        // Inform user of success.
        println!("Successfully repaired the StGit metadata.");
        ctx.print_series()
    }
}
