#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

use anyhow::Result;
use clap::Parser;

mod cli;
mod constants;
mod ctx;
mod errors;
mod series;
mod stg;
mod subcommands;

#[tokio::main]
async fn main() -> Result<()> {
    Ok(cli::Cli::parse().run().await?)
}
