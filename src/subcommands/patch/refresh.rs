//! `refresh` subcommand.

use crate::{
    ctx::SgContext,
    errors::{SgError, SgResult},
    stg,
};
use clap::Args;

/// CLI arguments for the `refresh` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct RefreshCmd {
    /// The patch to refresh. Defaults to the marked patch, falling back to
    /// the current patch.
    pub name: Option<String>,
    /// Only update the files already in the patch, do not add new ones.
    #[arg(short, long)]
    pub update: bool,
}

impl RefreshCmd {
    /// Run the `refresh` subcommand.
    pub fn run(self, ctx: SgContext) -> SgResult<()> {
        let mut args = vec!["refresh"];
        if self.update {
            args.push("--update");
        }

        // An explicit argument wins over the marked patch. With neither, the
        // working tree changes refresh into the current patch.
        let target = match self.name {
            Some(name) => {
                // Surface unknown names before shelling out.
                if ctx.load_series()?.get(&name).is_none() {
                    return Err(SgError::PatchNotFound(name));
                }
                Some(name)
            }
            None => ctx.marked().map(ToOwned::to_owned),
        };
        if let Some(ref name) = target {
            args.push("--patch");
            args.push(name);
        }

        stg::run_stg_captured(&args, ctx.workdir()?)?;
        ctx.print_series()
    }
}
