//! Embedding: writes a masked bitstream into a carrier in place.
//!
//! Only the least significant bit of each touched byte changes; every
//! other bit of the carrier is preserved. Capacity is checked before the
//! first write, so a rejected message leaves the carrier byte-for-byte
//! intact.

use crate::carrier::{AudioCarrier, ImageCarrier, VideoCarrier, PIXEL_STRIDE};
use crate::error::StegoError;
use crate::filter;
use crate::mask::{mask, MaskProfile};

/// Capacity error text for image carriers.
pub(crate) const IMAGE_FULL: &str = "Message too long for this image";

/// Capacity error text for audio carriers.
pub(crate) const AUDIO_FULL: &str = "Message too long for this audio file";

/// Number of zero bytes appended after a video payload.
const VIDEO_TRAILER: usize = 16;

/// Embeds an encoded bitstream into the RGBA raster in place.
///
/// Each bit is written to the red LSB of a filtered pixel; the green and
/// blue LSBs carry the masked copies `bit ^ m` and `(bit + m) mod 2`.
/// Alpha is untouched. Positions cycle when the stream is longer than the
/// filtered set, so overflowing bits overwrite earlier ones at the same
/// pixel.
pub fn embed_in_image(
    image: &mut ImageCarrier,
    stream: &[u8],
    strength: f64,
) -> Result<(), StegoError> {
    let total = image.pixel_count();
    if stream.len() > total {
        return Err(StegoError::CapacityExceeded(IMAGE_FULL.into()));
    }

    let mask = mask(total, strength, MaskProfile::Image);
    let positions = filter::image_positions(image.width, image.height);

    for (i, &bit) in stream.iter().enumerate() {
        let pixel = positions[i % positions.len()] * PIXEL_STRIDE;
        let m = mask[i % mask.len()];

        image.pixels[pixel] = (image.pixels[pixel] & 0xFE) | bit;
        image.pixels[pixel + 1] = (image.pixels[pixel + 1] & 0xFE) | (bit ^ m);
        image.pixels[pixel + 2] = (image.pixels[pixel + 2] & 0xFE) | ((bit + m) % 2);
    }

    Ok(())
}

/// Embeds an encoded bitstream into the audio byte buffer in place.
///
/// Single channel: the masked bit `(bit + m) mod 2` replaces the LSB of
/// the byte at `header_len + position`.
pub fn embed_in_audio(
    audio: &mut AudioCarrier,
    stream: &[u8],
    strength: f64,
) -> Result<(), StegoError> {
    if stream.len() > audio.sample_region_len() {
        return Err(StegoError::CapacityExceeded(AUDIO_FULL.into()));
    }

    let mask = mask(stream.len(), strength, MaskProfile::Audio);
    let positions = filter::audio_positions(&audio.bytes, audio.header_len);
    if positions.is_empty() {
        return Ok(());
    }

    for (i, &bit) in stream.iter().enumerate() {
        let at = audio.header_len + positions[i % positions.len()];
        if at < audio.bytes.len() {
            let masked = (bit + mask[i % mask.len()]) % 2;
            audio.bytes[at] = (audio.bytes[at] & 0xFE) | masked;
        }
    }

    Ok(())
}

/// Appends a masked message block to a video container.
///
/// Legacy stub: the message's UTF-8 bytes are XORed with an image-profile
/// mask and appended after the container bytes, followed by 16 zero bytes.
/// There is no length prefix and no position protocol, so the extractor
/// cannot recover the payload; revealing a video carrier reports a fixed
/// placeholder instead.
pub fn embed_in_video(video: &mut VideoCarrier, message: &str, strength: f64) {
    let payload = message.as_bytes();
    let mask = mask(payload.len(), strength, MaskProfile::Image);

    video.bytes.reserve(payload.len() + VIDEO_TRAILER);
    for (i, &byte) in payload.iter().enumerate() {
        video.bytes.push(byte ^ mask[i % mask.len()]);
    }
    video.bytes.extend(std::iter::repeat(0u8).take(VIDEO_TRAILER));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits;

    fn test_image(width: u32, height: u32) -> ImageCarrier {
        let pixels = (0..width as usize * height as usize * PIXEL_STRIDE)
            .map(|i| ((i * 31) % 256) as u8)
            .collect();
        ImageCarrier::new(width, height, pixels).unwrap()
    }

    #[test]
    fn image_channels_carry_masked_copies() {
        let mut image = test_image(64, 64);
        let stream = bits::encode_message("HI");

        embed_in_image(&mut image, &stream, 0.5).unwrap();

        let mask = mask(image.pixel_count(), 0.5, MaskProfile::Image);
        let positions = filter::image_positions(64, 64);

        for (i, &bit) in stream.iter().enumerate() {
            let pixel = positions[i] * PIXEL_STRIDE;
            let m = mask[i];
            assert_eq!(image.pixels[pixel] & 1, bit);
            assert_eq!(image.pixels[pixel + 1] & 1, bit ^ m);
            assert_eq!(image.pixels[pixel + 2] & 1, (bit + m) % 2);
        }
    }

    #[test]
    fn image_upper_bits_and_alpha_survive() {
        let mut image = test_image(64, 64);
        let before = image.pixels.clone();
        let stream = bits::encode_message("upper bits");

        embed_in_image(&mut image, &stream, 0.8).unwrap();

        for (after, before) in image.pixels.iter().zip(&before) {
            assert_eq!(after & 0xFE, before & 0xFE);
        }
        for (i, (&after, &before)) in image.pixels.iter().zip(&before).enumerate() {
            if i % PIXEL_STRIDE == 3 {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn image_rejects_oversized_stream_untouched() {
        let mut image = test_image(2, 2);
        let before = image.pixels.clone();
        let stream = bits::encode_message("far too long");

        let err = embed_in_image(&mut image, &stream, 0.5).unwrap_err();
        assert_eq!(err.to_string(), IMAGE_FULL);
        assert_eq!(image.pixels, before);
    }

    #[test]
    fn audio_rejects_oversized_stream_untouched() {
        let mut audio = AudioCarrier::new(44, vec![0u8; 44 + 8]).unwrap();
        let before = audio.bytes.clone();
        let stream = bits::encode_message("x");

        let err = embed_in_audio(&mut audio, &stream, 0.5).unwrap_err();
        assert_eq!(err.to_string(), AUDIO_FULL);
        assert_eq!(audio.bytes, before);
    }

    #[test]
    fn audio_writes_only_lsbs_past_header() {
        let mut bytes = vec![0xAAu8; 44];
        for _ in 0..200 {
            bytes.extend_from_slice(&6000i16.to_le_bytes());
        }
        let mut audio = AudioCarrier::new(44, bytes).unwrap();
        let before = audio.bytes.clone();

        embed_in_audio(&mut audio, &bits::encode_message("lsb"), 0.4).unwrap();

        assert_eq!(&audio.bytes[..44], &before[..44]);
        for (after, before) in audio.bytes.iter().zip(&before) {
            assert_eq!(after & 0xFE, before & 0xFE);
        }
    }

    #[test]
    fn video_appends_masked_payload_and_trailer() {
        let mut video = VideoCarrier {
            bytes: vec![1, 2, 3],
        };
        embed_in_video(&mut video, "clip", 0.5);

        assert_eq!(video.bytes.len(), 3 + 4 + VIDEO_TRAILER);
        assert_eq!(&video.bytes[..3], &[1, 2, 3]);
        assert!(video.bytes[7..].iter().all(|&b| b == 0));

        let mask = mask(4, 0.5, MaskProfile::Image);
        for (i, &byte) in "clip".as_bytes().iter().enumerate() {
            assert_eq!(video.bytes[3 + i], byte ^ mask[i]);
        }
    }
}
