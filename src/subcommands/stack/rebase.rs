//! `rebase` subcommand.

use crate::{ctx::SgContext, errors::SgResult, stg};
use clap::Args;
use nu_ansi_term::Color::Blue;

/// CLI arguments for the `rebase` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct RebaseCmd {
    /// The committish to rebase the stack onto.
    pub target: Option<String>,
}

impl RebaseCmd {
    /// Run the `rebase` subcommand.
    pub fn run(self, ctx: SgContext) -> SgResult<()> {
        // Prompt the user for the new base when it was not passed.
        let target = match self.target {
            Some(target) => target,
            None => inquire::Text::new("Rebase the stack onto:").prompt()?,
        };

        stg::run_stg_captured(&["rebase", target.as_str()], ctx.workdir()?)?;

        // Inform user of success.
        println!(
            "Successfully rebased the stack onto `{}`.",
            Blue.paint(target.as_str())
        );
        ctx.print_series()
    }
}
