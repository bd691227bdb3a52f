//! ZFish documentation server.
//!
//! Serves the documentation site, social preview images, robots.txt, and
//! the sitemap from in-process content tables.

mod commands;
mod routes;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
