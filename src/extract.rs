//! Extraction: scans a carrier for the sentinel-terminated bitstream.
//!
//! The scan iterates the same filtered positions the embedder used, in the
//! same order, and stops as soon as the accumulated tail matches the
//! sentinel. If the sentinel never appears, whatever accumulated is
//! decoded as-is rather than reported as an error.

use crate::bits::{self, SENTINEL};
use crate::carrier::{AudioCarrier, ImageCarrier, PIXEL_STRIDE};
use crate::filter;
use crate::mask::{mask, MaskProfile};

/// Reported when the decoded message is empty.
pub const NO_MESSAGE: &str = "No hidden message found";

/// Reported for video carriers, whose embedding has no extraction
/// protocol.
pub const VIDEO_PLACEHOLDER: &str = "Advanced video masking extraction - demonstration mode";

/// Recovers the message embedded in an RGBA raster.
///
/// The red-channel LSB is the message bit. The green and blue channels are
/// write-only redundancy: the embedder fills them with masked copies, but
/// reconstruction never consults them.
pub fn extract_from_image(image: &ImageCarrier, _strength: f64) -> String {
    let positions = filter::image_positions(image.width, image.height);

    let mut acc = Vec::new();
    for &p in &positions {
        acc.push(image.pixels[p * PIXEL_STRIDE] & 1);
        if bits::ends_with_sentinel(&acc) {
            break;
        }
    }

    finish(acc)
}

/// Recovers the message embedded in an audio byte buffer.
///
/// Reverses the additive mask on each byte's LSB, with the same sentinel
/// termination as the image path.
pub fn extract_from_audio(audio: &AudioCarrier, strength: f64) -> String {
    let positions = filter::audio_positions(&audio.bytes, audio.header_len);
    let mask = mask(positions.len(), strength, MaskProfile::Audio);

    let mut acc = Vec::new();
    for (i, &p) in positions.iter().enumerate() {
        let at = audio.header_len + p;
        if at >= audio.bytes.len() {
            continue;
        }
        let extracted = audio.bytes[at] & 1;
        let m = mask[i % mask.len()];
        acc.push((extracted + 2 - m) % 2);
        if bits::ends_with_sentinel(&acc) {
            break;
        }
    }

    finish(acc)
}

/// Strips the sentinel, decodes 8-bit groups, and substitutes the
/// placeholder for an empty result.
fn finish(mut acc: Vec<u8>) -> String {
    acc.truncate(acc.len().saturating_sub(SENTINEL.len()));
    let message = bits::decode_bits(&acc);
    if message.is_empty() {
        NO_MESSAGE.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::encode_message;
    use crate::embed::{embed_in_audio, embed_in_image};

    fn test_image(width: u32, height: u32) -> ImageCarrier {
        let pixels = (0..width as usize * height as usize * PIXEL_STRIDE)
            .map(|i| ((i * 7 + 13) % 256) as u8)
            .collect();
        ImageCarrier::new(width, height, pixels).unwrap()
    }

    fn test_audio(sample_count: usize) -> AudioCarrier {
        let mut bytes = vec![0u8; 44];
        for i in 0..sample_count {
            let sample = 4000 + (i as i16 % 512);
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        AudioCarrier::new(44, bytes).unwrap()
    }

    #[test]
    fn image_round_trip() {
        let mut image = test_image(64, 64);
        embed_in_image(&mut image, &encode_message("carrier pigeon"), 0.5).unwrap();
        assert_eq!(extract_from_image(&image, 0.5), "carrier pigeon");
    }

    #[test]
    fn audio_round_trip() {
        let mut audio = test_audio(2000);
        embed_in_audio(&mut audio, &encode_message("tape hiss"), 0.7).unwrap();
        assert_eq!(extract_from_audio(&audio, 0.7), "tape hiss");
    }

    #[test]
    fn empty_message_reports_placeholder() {
        let mut audio = test_audio(500);
        embed_in_audio(&mut audio, &encode_message(""), 0.5).unwrap();
        assert_eq!(extract_from_audio(&audio, 0.5), NO_MESSAGE);
    }

    #[test]
    fn scan_stops_at_sentinel() {
        let mut image = test_image(64, 64);
        embed_in_image(&mut image, &encode_message("A"), 0.5).unwrap();

        // one character: 8 data bits + 16 sentinel bits
        let positions = filter::image_positions(64, 64);
        let mut acc = Vec::new();
        for &p in &positions {
            acc.push(image.pixels[p * PIXEL_STRIDE] & 1);
            if bits::ends_with_sentinel(&acc) {
                break;
            }
        }
        assert_eq!(acc.len(), 24);
    }

    #[test]
    fn audio_mismatched_strength_garbles_message() {
        let mut audio = test_audio(2000);
        embed_in_audio(&mut audio, &encode_message("HI"), 0.5).unwrap();
        assert_ne!(extract_from_audio(&audio, 0.3), "HI");
    }
}
