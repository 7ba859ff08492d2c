//! `unmark` subcommand.

use crate::{ctx::SgContext, errors::SgResult};
use clap::Args;
use nu_ansi_term::Color::Blue;

/// CLI arguments for the `unmark` subcommand.
#[derive(Debug, Clone, Eq, PartialEq, Args)]
pub struct UnmarkCmd;

impl UnmarkCmd {
    /// Run the `unmark` subcommand.
    pub fn run(self, mut ctx: SgContext) -> SgResult<()> {
        match ctx.marked() {
            Some(name) => println!("Unmarked patch `{}`.", Blue.paint(name)),
            None => println!("No patch is marked."),
        }

        ctx.clear_mark();
        ctx.print_series()
    }
}
