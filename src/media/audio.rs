//! WAV audio carriers.
//!
//! Input WAVs are decoded with `hound` and re-emitted with a canonical
//! 44-byte header, so byte offsets past the header are identical on the
//! embedding and extracting ends even when the original file carried
//! extra RIFF chunks. Only 16-bit integer PCM is accepted.

use std::io::Cursor;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::carrier::{AudioCarrier, RawCarrier, WAV_HEADER_LEN};
use crate::error::StegoError;

/// Decodes WAV bytes into an audio carrier with a canonical header.
pub fn decode(bytes: &[u8]) -> Result<RawCarrier, StegoError> {
    let reader = WavReader::new(Cursor::new(bytes))
        .map_err(|e| StegoError::CarrierDecode(e.to_string()))?;
    let spec = reader.spec();

    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(StegoError::CarrierDecode(format!(
            "only 16-bit PCM WAV is supported, got {} bits {:?}",
            spec.bits_per_sample, spec.sample_format
        )));
    }

    let samples: Vec<i16> = reader
        .into_samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StegoError::CarrierDecode(e.to_string()))?;

    let buffer = write_wav(spec, &samples)?;
    let carrier = AudioCarrier::new(WAV_HEADER_LEN, buffer)?;
    Ok(RawCarrier::Audio(carrier))
}

/// An embedded audio carrier is already a complete WAV buffer.
pub fn encode(audio: &AudioCarrier) -> Vec<u8> {
    audio.bytes.clone()
}

/// Writes samples into an in-memory WAV buffer with the canonical header.
fn write_wav(spec: WavSpec, samples: &[i16]) -> Result<Vec<u8>, StegoError> {
    let mut bytes = Vec::new();
    {
        let mut writer = WavWriter::new(Cursor::new(&mut bytes), spec)
            .map_err(|e| StegoError::Internal(format!("WAV encode failed: {e}")))?;
        for &sample in samples {
            writer
                .write_sample(sample)
                .map_err(|e| StegoError::Internal(format!("WAV encode failed: {e}")))?;
        }
        writer
            .finalize()
            .map_err(|e| StegoError::Internal(format!("WAV encode failed: {e}")))?;
    }
    Ok(bytes)
}
