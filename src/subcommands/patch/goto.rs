//! `goto` subcommand.

use crate::{ctx::SgContext, errors::SgResult, stg};
use clap::Args;

/// CLI arguments for the `goto` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct GotoCmd {
    /// The patch to go to. Defaults to the marked patch, falling back to an
    /// interactive selection.
    pub name: Option<String>,
}

impl GotoCmd {
    /// Run the `goto` subcommand.
    pub fn run(self, ctx: SgContext) -> SgResult<()> {
        let name = ctx.resolve_patch(self.name, "Select a patch to go to")?;

        stg::run_stg_captured(&["goto", name.as_str()], ctx.workdir()?)?;
        ctx.print_series()
    }
}
