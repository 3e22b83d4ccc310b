//! CLI commands.

mod clean;
mod inspect;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::CleanerConfig;
use crate::logging::LogConfig;

pub use clean::CleanCommand;
pub use inspect::InspectCommand;

/// eventctl - normalize event types against the application registry.
#[derive(Debug, Parser)]
#[command(name = "eventctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub cleaner: CleanerConfig,

    #[command(flatten)]
    pub log: LogConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the canonical form of event types.
    Clean(CleanCommand),

    /// Show how an event type splits into prefix, application and segments.
    Inspect(InspectCommand),
}

impl Cli {
    /// Run the command against stdin and stdout.
    pub fn run(self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), &mut stdout.lock())
    }

    /// Run the command against the given input and output.
    pub fn run_with<R: BufRead, W: Write>(self, input: R, out: &mut W) -> Result<()> {
        let cleaner = self.cleaner.build_cleaner()?;
        debug!(prefix = cleaner.prefix(), "Cleaner configured");

        match self.command {
            Commands::Clean(cmd) => cmd.run(&cleaner, input, out),
            Commands::Inspect(cmd) => cmd.run(&cleaner, out),
        }
    }
}
