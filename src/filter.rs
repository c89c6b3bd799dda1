//! Carrier position selection.
//!
//! Picks which carrier units may receive message bits. Both heuristics
//! favor a mid band - geometric frequency for images, sample amplitude for
//! audio - so embedding stays out of flat and clipped regions. The
//! extractor runs the identical selection; any divergence breaks decoding.

/// Upper bound on the fallback position count when a filter selects
/// nothing.
const FALLBACK_LIMIT: usize = 1000;

/// Lower amplitude bound for eligible audio samples (exclusive).
const AMPLITUDE_MIN: i32 = 1000;

/// Upper amplitude bound for eligible audio samples (exclusive).
const AMPLITUDE_MAX: i32 = 20000;

/// Selects pixel indices inside the mid-frequency band.
///
/// For each linear index, the distance of `(x, y)` from the origin is
/// compared against the band `(0.3 * diag, 0.6 * diag)`. An empty
/// selection falls back to the first `min(1000, width * height)` indices.
pub fn image_positions(width: u32, height: u32) -> Vec<usize> {
    let width = width as usize;
    let height = height as usize;
    let total = width * height;

    let diag = ((width * width + height * height) as f64).sqrt();
    let threshold = diag * 0.3;

    let positions: Vec<usize> = (0..total)
        .filter(|&i| {
            let x = (i % width) as f64;
            let y = (i / width) as f64;
            let freq = (x * x + y * y).sqrt();
            freq > threshold && freq < threshold * 2.0
        })
        .collect();

    if positions.is_empty() {
        (0..total.min(FALLBACK_LIMIT)).collect()
    } else {
        positions
    }
}

/// Selects byte offsets (relative to the end of the header) whose sample
/// amplitude falls inside `(1000, 20000)`.
///
/// Samples are little-endian `i16` values read at even offsets past the
/// header. An empty selection falls back to the first
/// `min(1000, region / 2)` even offsets.
pub fn audio_positions(bytes: &[u8], header_len: usize) -> Vec<usize> {
    let region = bytes.len().saturating_sub(header_len);

    let mut positions = Vec::new();
    for i in (0..region).step_by(2) {
        let at = header_len + i;
        if at + 1 >= bytes.len() {
            break;
        }
        let sample = i16::from_le_bytes([bytes[at], bytes[at + 1]]);
        let amplitude = (sample as i32).abs();
        if amplitude > AMPLITUDE_MIN && amplitude < AMPLITUDE_MAX {
            positions.push(i);
        }
    }

    if positions.is_empty() {
        (0..(region / 2).min(FALLBACK_LIMIT)).map(|i| i * 2).collect()
    } else {
        positions
    }
}
