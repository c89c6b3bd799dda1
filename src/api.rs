//! Public entry points: hide and reveal, with wall-clock timing.
//!
//! Everything here is recomputed per call from `(carrier, strength)`
//! alone. No state is shared between calls, so concurrent operations on
//! independent carriers need no synchronization.

use std::time::{Duration, Instant};

use crate::bits;
use crate::carrier::RawCarrier;
use crate::embed;
use crate::error::StegoFailure;
use crate::extract;

/// Result of a successful hide. The carrier was mutated in place.
#[derive(Debug, Clone, Copy)]
pub struct HideReport {
    /// Wall-clock time the embedding took.
    pub elapsed: Duration,
}

/// Result of a successful reveal.
#[derive(Debug, Clone)]
pub struct RevealReport {
    /// The recovered message, or a placeholder when nothing decoded.
    pub message: String,
    /// Wall-clock time the extraction took.
    pub elapsed: Duration,
}

/// Hides `message` in the carrier, mutating it in place.
///
/// The mask and position set are derived from the carrier and `strength`
/// alone, so [`reveal`] with the same strength recovers the message with
/// no side channel. Characters above code point 255 are truncated to
/// their low byte. A message that does not fit fails with a capacity
/// error and leaves the carrier untouched.
pub fn hide(
    carrier: &mut RawCarrier,
    message: &str,
    strength: f64,
) -> Result<HideReport, StegoFailure> {
    let start = Instant::now();

    let result = match carrier {
        RawCarrier::Image(image) => {
            embed::embed_in_image(image, &bits::encode_message(message), strength)
        }
        RawCarrier::Audio(audio) => {
            embed::embed_in_audio(audio, &bits::encode_message(message), strength)
        }
        RawCarrier::Video(video) => {
            embed::embed_in_video(video, message, strength);
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(HideReport {
            elapsed: start.elapsed(),
        }),
        Err(error) => Err(StegoFailure {
            error,
            elapsed: start.elapsed(),
        }),
    }
}

/// Recovers the message hidden in the carrier.
///
/// Image and audio extraction never fails: if the sentinel is absent the
/// accumulated bits are decoded as-is, and an empty result is reported as
/// the [`extract::NO_MESSAGE`] placeholder. Video carriers report a fixed
/// placeholder because the video embedding has no extraction protocol.
pub fn reveal(carrier: &RawCarrier, strength: f64) -> Result<RevealReport, StegoFailure> {
    let start = Instant::now();

    let message = match carrier {
        RawCarrier::Image(image) => extract::extract_from_image(image, strength),
        RawCarrier::Audio(audio) => extract::extract_from_audio(audio, strength),
        RawCarrier::Video(_) => extract::VIDEO_PLACEHOLDER.to_string(),
    };

    Ok(RevealReport {
        message,
        elapsed: start.elapsed(),
    })
}
