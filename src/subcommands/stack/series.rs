//! `series` subcommand.

use crate::{ctx::SgContext, errors::SgResult};
use clap::Args;

/// CLI arguments for the `series` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct SeriesCmd;

impl SeriesCmd {
    /// Run the `series` subcommand.
    pub fn run(self, ctx: SgContext) -> SgResult<()> {
        ctx.print_series()
    }
}
