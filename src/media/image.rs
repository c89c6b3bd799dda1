//! PNG/BMP image carriers.
//!
//! Decodes a lossless raster into the RGBA buffer the codec operates on
//! and re-encodes the embedded result as PNG.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::carrier::{ImageCarrier, RawCarrier};
use crate::error::StegoError;

/// Decodes PNG or BMP bytes into an RGBA image carrier.
pub fn decode(bytes: &[u8]) -> Result<RawCarrier, StegoError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| StegoError::CarrierDecode(e.to_string()))?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    let carrier = ImageCarrier::new(width, height, rgba.into_raw())?;
    Ok(RawCarrier::Image(carrier))
}

/// Encodes an image carrier as PNG bytes.
pub fn encode(image: &ImageCarrier) -> Result<Vec<u8>, StegoError> {
    encode_as(image, ImageFormat::Png)
}

/// Encodes an image carrier in the given lossless format.
pub fn encode_as(image: &ImageCarrier, format: ImageFormat) -> Result<Vec<u8>, StegoError> {
    let raster = RgbaImage::from_raw(image.width, image.height, image.pixels.clone())
        .ok_or_else(|| {
            StegoError::Internal("pixel buffer does not match raster dimensions".into())
        })?;

    let mut bytes = Vec::new();
    raster
        .write_to(&mut Cursor::new(&mut bytes), format)
        .map_err(|e| StegoError::Internal(format!("image encode failed: {e}")))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_carrier(width: u32, height: u32) -> ImageCarrier {
        let pixels = (0..width as usize * height as usize)
            .flat_map(|i| {
                [
                    ((i * 17) % 256) as u8,
                    ((i * 23) % 256) as u8,
                    ((i * 31) % 256) as u8,
                    0xFF,
                ]
            })
            .collect();
        ImageCarrier::new(width, height, pixels).unwrap()
    }

    #[test]
    fn png_round_trip_preserves_every_byte() {
        let carrier = test_carrier(40, 25);
        let bytes = encode(&carrier).unwrap();

        match decode(&bytes).unwrap() {
            RawCarrier::Image(loaded) => {
                assert_eq!(loaded.width, 40);
                assert_eq!(loaded.height, 25);
                assert_eq!(loaded.pixels, carrier.pixels);
            }
            other => panic!("expected image carrier, got {}", other.kind()),
        }
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode(&[0u8; 16]).unwrap_err();
        assert!(matches!(err, StegoError::CarrierDecode(_)));
    }
}
