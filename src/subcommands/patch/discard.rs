//! `discard` subcommand.

use crate::{ctx::SgContext, errors::SgResult};
use clap::Args;

/// CLI arguments for the `discard` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct DiscardCmd {
    /// The patch to discard. Defaults to the marked patch, falling back to an
    /// interactive selection.
    pub name: Option<String>,
}

impl DiscardCmd {
    /// Run the `discard` subcommand.
    pub fn run(self, mut ctx: SgContext) -> SgResult<()> {
        let name = ctx.resolve_patch(self.name, "Select a patch to discard")?;

        ctx.discard_patch(name.as_str())?;
        ctx.print_series()
    }
}
