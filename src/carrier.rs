//! Carrier buffers for masking-and-filtering steganography.
//!
//! A carrier is an already-decoded, caller-owned byte buffer: an RGBA pixel
//! raster, a WAV-style byte stream (header plus little-endian 16-bit
//! samples), or an opaque video blob. Container parsing lives in
//! [`crate::media`]; the codec itself only ever sees these normalized
//! buffers and mutates them in place.

use crate::error::StegoError;

/// Bytes per RGBA pixel.
pub const PIXEL_STRIDE: usize = 4;

/// Canonical WAV header length produced by the media adapter.
pub const WAV_HEADER_LEN: usize = 44;

/// An owned, mutable carrier buffer plus the metadata the codec needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawCarrier {
    Image(ImageCarrier),
    Audio(AudioCarrier),
    Video(VideoCarrier),
}

impl RawCarrier {
    /// Short human-readable kind name.
    pub fn kind(&self) -> &'static str {
        match self {
            RawCarrier::Image(_) => "image",
            RawCarrier::Audio(_) => "audio",
            RawCarrier::Video(_) => "video",
        }
    }

    /// Number of embeddable units: pixels for images, sample-region bytes
    /// for audio, raw bytes for video.
    pub fn unit_count(&self) -> usize {
        match self {
            RawCarrier::Image(image) => image.pixel_count(),
            RawCarrier::Audio(audio) => audio.sample_region_len(),
            RawCarrier::Video(video) => video.bytes.len(),
        }
    }
}

/// An RGBA pixel raster, 4 bytes per pixel in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCarrier {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl ImageCarrier {
    /// Creates an image carrier, checking that the buffer matches the
    /// declared dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, StegoError> {
        let expected = width as usize * height as usize * PIXEL_STRIDE;
        if pixels.len() != expected {
            return Err(StegoError::Internal(format!(
                "pixel buffer is {} bytes, expected {} for {}x{} RGBA",
                pixels.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A WAV-style byte buffer: `header_len` header bytes followed by
/// little-endian 16-bit signed samples, addressed at byte granularity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioCarrier {
    pub header_len: usize,
    pub bytes: Vec<u8>,
}

impl AudioCarrier {
    /// Creates an audio carrier, checking that the header fits the buffer.
    pub fn new(header_len: usize, bytes: Vec<u8>) -> Result<Self, StegoError> {
        if header_len > bytes.len() {
            return Err(StegoError::Internal(format!(
                "header length {} exceeds buffer of {} bytes",
                header_len,
                bytes.len()
            )));
        }
        Ok(Self { header_len, bytes })
    }

    /// Length in bytes of the sample region past the header.
    pub fn sample_region_len(&self) -> usize {
        self.bytes.len() - self.header_len
    }
}

/// An opaque video container. Only the stub embedding path touches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCarrier {
    pub bytes: Vec<u8>,
}
