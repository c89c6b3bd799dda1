//! Container collaborators: files in, carriers out, and back again.
//!
//! The codec core never parses containers. This module is the boundary
//! that turns file bytes into [`RawCarrier`] buffers and embedded
//! carriers back into files. Images always come back out as PNG - a lossy
//! re-encode would destroy the embedded LSBs.

pub mod audio;
pub mod image;

use std::path::Path;

use crate::carrier::{RawCarrier, VideoCarrier};
use crate::error::StegoError;

/// Carrier container kinds recognized by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarrierKind {
    Image,
    Audio,
    Video,
}

/// Determines the carrier kind from a file extension.
///
/// Lossless rasters (`png`, `bmp`) are images, `wav` is audio, and the
/// common video containers pass through as opaque video. Anything else is
/// rejected.
pub fn kind_for_path(path: &Path) -> Result<CarrierKind, StegoError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "png" | "bmp" => Ok(CarrierKind::Image),
        "wav" => Ok(CarrierKind::Audio),
        "mp4" | "avi" | "mov" | "mkv" | "webm" => Ok(CarrierKind::Video),
        "" => Err(StegoError::UnsupportedCarrier(format!(
            "{} has no file extension",
            path.display()
        ))),
        other => Err(StegoError::UnsupportedCarrier(format!(
            "unrecognized container '{other}'"
        ))),
    }
}

/// Decodes raw file bytes into a carrier of the given kind.
pub fn from_bytes(kind: CarrierKind, bytes: &[u8]) -> Result<RawCarrier, StegoError> {
    match kind {
        CarrierKind::Image => image::decode(bytes),
        CarrierKind::Audio => audio::decode(bytes),
        CarrierKind::Video => Ok(RawCarrier::Video(VideoCarrier {
            bytes: bytes.to_vec(),
        })),
    }
}

/// Encodes a carrier back into file bytes: PNG for images, WAV for audio,
/// raw bytes for video.
pub fn to_bytes(carrier: &RawCarrier) -> Result<Vec<u8>, StegoError> {
    match carrier {
        RawCarrier::Image(img) => image::encode(img),
        RawCarrier::Audio(aud) => Ok(audio::encode(aud)),
        RawCarrier::Video(vid) => Ok(vid.bytes.clone()),
    }
}

/// Loads a carrier from a file, detecting the kind by extension.
pub fn load(path: &Path) -> Result<RawCarrier, StegoError> {
    let kind = kind_for_path(path)?;
    let bytes = std::fs::read(path)?;
    from_bytes(kind, &bytes)
}

/// Writes a carrier to a file.
///
/// The path's extension must match the carrier kind. Image carriers are
/// written as PNG unless the path ends in `.bmp`.
pub fn save(carrier: &RawCarrier, path: &Path) -> Result<(), StegoError> {
    let kind = kind_for_path(path)?;
    let matches = matches!(
        (carrier, kind),
        (RawCarrier::Image(_), CarrierKind::Image)
            | (RawCarrier::Audio(_), CarrierKind::Audio)
            | (RawCarrier::Video(_), CarrierKind::Video)
    );
    if !matches {
        return Err(StegoError::UnsupportedCarrier(format!(
            "{} does not match a {} carrier",
            path.display(),
            carrier.kind()
        )));
    }

    let bytes = match carrier {
        RawCarrier::Image(img) => {
            let is_bmp = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("bmp"));
            let format = if is_bmp {
                ::image::ImageFormat::Bmp
            } else {
                ::image::ImageFormat::Png
            };
            image::encode_as(img, format)?
        }
        other => to_bytes(other)?,
    };

    std::fs::write(path, bytes)?;
    Ok(())
}
