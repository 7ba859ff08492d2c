//! The CLI for `sg`.

use crate::{ctx::SgContext, errors::SgResult, subcommands::Subcommands};
use anyhow::anyhow;
use clap::{
    builder::styling::{AnsiColor, Color, Style},
    ArgAction, Parser,
};
use tracing::Level;

const ABOUT: &str = "sg is a CLI application for driving StGit patch stacks.";

/// The CLI application for `sg`.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
#[command(about = ABOUT, version, styles = cli_styles())]
pub struct Cli {
    /// Verbosity level (0-4)
    #[arg(short, action = ArgAction::Count)]
    pub v: u8,
    /// The subcommand to run
    #[clap(subcommand)]
    pub subcommand: Option<Subcommands>,
}

impl Cli {
    /// Run the CLI application with the given arguments.
    pub async fn run(self) -> SgResult<()> {
        let cli = self.init_tracing_subscriber()?;
        let ctx = SgContext::discover()?;

        match cli.subcommand {
            Some(subcommand) => subcommand.run(ctx).await,
            // With no subcommand, print the series view.
            None => ctx.print_series(),
        }
    }

    /// Initializes the tracing subscriber
    ///
    /// # Returns
    /// - `SgResult<()>` - Ok if successful, Err otherwise.
    pub(crate) fn init_tracing_subscriber(self) -> SgResult<Self> {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(match self.v {
                0 => Level::ERROR,
                1 => Level::WARN,
                2 => Level::INFO,
                3 => Level::DEBUG,
                _ => Level::TRACE,
            })
            .finish();

        tracing::subscriber::set_global_default(subscriber).map_err(|e| anyhow!(e))?;

        Ok(self)
    }
}

/// Styles for the CLI application.
const fn cli_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
        )
        .header(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
        )
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
        .invalid(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .error(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .valid(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::White))))
}
