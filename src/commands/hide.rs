//! Hide command - embed a message in a carrier file.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use maskhide::{hide, media};

use super::CommandExecutor;

/// Hide a message in an image (PNG/BMP), audio (WAV), or video carrier.
///
/// The carrier is decoded, the message embedded under the strength-derived
/// mask, and the result written to --output. Reveal it later with the same
/// strength value.
#[derive(Args, Debug)]
pub struct HideCommand {
    /// Path to the carrier file (.png, .bmp, .wav, or a video container)
    #[arg(short, long)]
    pub carrier: PathBuf,

    /// Message to hide (reads from stdin if not provided)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Output path for the embedded carrier (same kind as the input;
    /// images are written as PNG)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Masking strength in (0, 1]
    #[arg(short, long, default_value_t = 0.5)]
    pub strength: f64,

    /// Verbose output (shows carrier stats and timing)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for HideCommand {
    fn execute(&self) -> Result<()> {
        if !(self.strength > 0.0 && self.strength <= 1.0) {
            anyhow::bail!("Strength must be in (0, 1], got {}", self.strength);
        }

        let mut carrier = media::load(&self.carrier)
            .with_context(|| format!("Failed to load carrier from {}", self.carrier.display()))?;

        if self.verbose {
            eprintln!(
                "Loaded {} carrier ({} units)",
                carrier.kind(),
                carrier.unit_count()
            );
        }

        let message = match &self.message {
            Some(m) => m.clone(),
            None => {
                eprintln!("Reading message from stdin (Ctrl+D to finish):");
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read message from stdin")?;
                buffer.trim().to_string()
            }
        };

        if message.is_empty() {
            anyhow::bail!("Message cannot be empty");
        }

        let report = hide(&mut carrier, &message, self.strength)
            .map_err(|failure| anyhow::anyhow!("{failure}"))?;

        media::save(&carrier, &self.output)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;

        println!(
            "Embedded {} characters into {}",
            message.chars().count(),
            self.output.display()
        );
        if self.verbose {
            eprintln!("Embedding took {:.2?}", report.elapsed);
        }

        Ok(())
    }
}
