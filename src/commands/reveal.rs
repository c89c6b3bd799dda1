//! Reveal command - recover the message hidden in a carrier file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use maskhide::{media, reveal};

use super::CommandExecutor;

/// Reveal the message hidden in a carrier file.
///
/// The strength value must match the one used to hide the message. Image
/// and audio carriers always produce output: if no sentinel is found, a
/// placeholder (or garbage) is printed rather than an error.
#[derive(Args, Debug)]
pub struct RevealCommand {
    /// Path to the embedded carrier file
    #[arg(short, long)]
    pub carrier: PathBuf,

    /// Masking strength used when the message was hidden
    #[arg(short, long, default_value_t = 0.5)]
    pub strength: f64,

    /// Verbose output (shows carrier stats and timing)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for RevealCommand {
    fn execute(&self) -> Result<()> {
        if !(self.strength > 0.0 && self.strength <= 1.0) {
            anyhow::bail!("Strength must be in (0, 1], got {}", self.strength);
        }

        let carrier = media::load(&self.carrier)
            .with_context(|| format!("Failed to load carrier from {}", self.carrier.display()))?;

        if self.verbose {
            eprintln!(
                "Loaded {} carrier ({} units)",
                carrier.kind(),
                carrier.unit_count()
            );
        }

        let report = reveal(&carrier, self.strength)
            .map_err(|failure| anyhow::anyhow!("{failure}"))?;

        println!("{}", report.message);
        if self.verbose {
            eprintln!("Extraction took {:.2?}", report.elapsed);
        }

        Ok(())
    }
}
