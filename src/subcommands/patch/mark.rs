//! `mark` subcommand.

use crate::{
    ctx::SgContext,
    errors::{SgError, SgResult},
};
use clap::Args;
use nu_ansi_term::Color::Blue;

/// CLI arguments for the `mark` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct MarkCmd {
    /// The patch to mark. Prompts with a selection when omitted.
    pub name: Option<String>,
}

impl MarkCmd {
    /// Run the `mark` subcommand.
    pub fn run(self, mut ctx: SgContext) -> SgResult<()> {
        let series = ctx.load_series()?;
        let name = match self.name {
            Some(name) => {
                // Refuse to mark a patch that is not in the series.
                if series.get(&name).is_none() {
                    return Err(SgError::PatchNotFound(name));
                }
                name
            }
            None => {
                if series.is_empty() {
                    return Err(SgError::EmptySeries);
                }
                inquire::Select::new("Select a patch to mark", series.display_patches())
                    .with_formatter(&|f| f.value.patch_name.clone())
                    .prompt()?
                    .patch_name
            }
        };

        println!("Marked patch `{}`.", Blue.paint(name.as_str()));
        ctx.set_mark(name);
        ctx.print_series()
    }
}
