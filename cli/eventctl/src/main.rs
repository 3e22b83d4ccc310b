//! eventctl - normalize event types the way the eventing controller does.

use anyhow::Result;
use clap::Parser;

use eventctl::commands::Cli;
use eventctl::{error, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log);

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
