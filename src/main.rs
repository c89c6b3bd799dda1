//! Maskhide - hide messages in images and audio under a deterministic
//! mask.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{CommandExecutor, HideCommand, InfoCommand, RevealCommand};

/// Maskhide - masking-and-filtering steganography
///
/// Embeds a text message into an image (PNG/BMP) or audio (WAV) carrier
/// using least-significant-bit writes at filtered positions, perturbed by
/// a deterministic mask derived from a strength value. Reveal the message
/// with the same strength value; nothing else is exchanged.
#[derive(Parser)]
#[command(name = "maskhide")]
#[command(version)]
#[command(about = "Hide and reveal messages in image and audio carriers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a message in a carrier file
    Hide(HideCommand),
    /// Reveal the message hidden in a carrier file
    Reveal(RevealCommand),
    /// Show carrier capacity information
    Info(InfoCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hide(cmd) => cmd.execute(),
        Commands::Reveal(cmd) => cmd.execute(),
        Commands::Info(cmd) => cmd.execute(),
    }
}
