//! `show` subcommand.

use crate::{ctx::SgContext, errors::SgResult, stg};
use clap::Args;

/// CLI arguments for the `show` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct ShowCmd {
    /// The patch to show. Defaults to the marked patch, falling back to an
    /// interactive selection.
    pub name: Option<String>,
}

impl ShowCmd {
    /// Run the `show` subcommand.
    pub fn run(self, ctx: SgContext) -> SgResult<()> {
        let name = ctx.resolve_patch(self.name, "Select a patch to show")?;

        // `stg show` pages its own output.
        stg::run_stg_passthrough(&["show", name.as_str()], ctx.workdir()?)
    }
}
