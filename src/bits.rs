//! Message/bitstream codec.
//!
//! A message becomes one byte per character, eight bits MSB-first, with a
//! fixed 16-bit end marker appended. Only single-byte code points survive:
//! characters above U+00FF are truncated to their low byte. Decoding walks
//! complete 8-bit groups and discards any trailing partial group.

/// End-of-message marker: fifteen ones followed by a zero.
pub const SENTINEL: [u8; 16] = [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0];

/// Encodes a message as a 0/1 bit sequence with the sentinel appended.
pub fn encode_message(message: &str) -> Vec<u8> {
    let mut bits = Vec::with_capacity(message.len() * 8 + SENTINEL.len());
    for ch in message.chars() {
        let byte = ch as u8;
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits.extend_from_slice(&SENTINEL);
    bits
}

/// Decodes 8-bit groups back into characters.
///
/// The caller strips the sentinel first. A trailing group shorter than
/// eight bits is discarded. Each byte maps to its Latin-1 code point.
pub fn decode_bits(bits: &[u8]) -> String {
    bits.chunks_exact(8)
        .map(|group| {
            let byte = group.iter().fold(0u8, |acc, &bit| (acc << 1) | bit);
            char::from(byte)
        })
        .collect()
}

/// True when the accumulated bits end in the sentinel pattern.
pub fn ends_with_sentinel(bits: &[u8]) -> bool {
    bits.len() >= SENTINEL.len() && bits[bits.len() - SENTINEL.len()..] == SENTINEL
}
