//! `eventctl inspect`.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use eventing_events::{compress_segments, Cleaner};

#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Event type to inspect.
    event_type: String,
}

impl InspectCommand {
    pub fn run<W: Write>(self, cleaner: &Cleaner, out: &mut W) -> Result<()> {
        let parsed = cleaner.parse(&self.event_type)?;

        writeln!(out, "prefix:      {}", cleaner.prefix())?;
        writeln!(out, "application: {}", parsed.application)?;
        writeln!(out, "segments:    {}", parsed.middle.join(" "))?;
        writeln!(out, "compressed:  {}", compress_segments(&parsed.middle).join(" "))?;
        writeln!(out, "version:     {}", parsed.version)?;
        writeln!(out, "canonical:   {}", cleaner.clean(&self.event_type)?)?;
        Ok(())
    }
}
