//! PortReclaim CLI - Free the development ports of a microfrontend layout
//!
//! Reads `apps/home/microfrontends.json` from the current directory and
//! terminates whatever listens on the declared ports.

mod commands;
mod logging;

use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "portreclaim")]
#[command(author, version, about = "Free the development ports declared in microfrontends.json")]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let _cli = Cli::parse();
    logging::init();

    let root = std::env::current_dir()?;
    commands::reclaim::run(&root).await
}
