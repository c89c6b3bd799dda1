//! Info command - show carrier capacity information.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use maskhide::bits::SENTINEL;
use maskhide::{filter, media, RawCarrier};

use super::CommandExecutor;

/// Show how much a carrier can hold and where.
#[derive(Args, Debug)]
pub struct InfoCommand {
    /// Path to the carrier file
    #[arg(short, long)]
    pub carrier: PathBuf,
}

impl CommandExecutor for InfoCommand {
    fn execute(&self) -> Result<()> {
        let carrier = media::load(&self.carrier)
            .with_context(|| format!("Failed to load carrier from {}", self.carrier.display()))?;

        let units = carrier.unit_count();
        let eligible = match &carrier {
            RawCarrier::Image(image) => {
                filter::image_positions(image.width, image.height).len()
            }
            RawCarrier::Audio(audio) => {
                filter::audio_positions(&audio.bytes, audio.header_len).len()
            }
            RawCarrier::Video(_) => 0,
        };

        println!("Carrier: {}", self.carrier.display());
        println!("  Kind: {}", carrier.kind());
        match &carrier {
            RawCarrier::Image(image) => {
                println!("  Dimensions: {}x{}", image.width, image.height);
            }
            RawCarrier::Audio(audio) => {
                println!("  Sample region: {} bytes", audio.sample_region_len());
            }
            RawCarrier::Video(video) => {
                println!("  Size: {} bytes", video.bytes.len());
            }
        }
        println!("  Units: {}", units);

        if matches!(carrier, RawCarrier::Video(_)) {
            println!("  Capacity: append-only stub (not extractable)");
        } else {
            let capacity = units.saturating_sub(SENTINEL.len()) / 8;
            println!("  Eligible positions: {}", eligible);
            println!("  Capacity: {} characters", capacity);
        }

        Ok(())
    }
}
