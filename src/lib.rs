//! # Maskhide - masking-and-filtering steganography
//!
//! Maskhide hides a text message inside an image raster or audio sample
//! stream and recovers it later from the carrier alone. The only thing the
//! two ends share is a numeric strength value in `(0, 1]`; there is no key
//! exchange and no side channel.
//!
//! ## How it works
//!
//! - A deterministic **mask** - a pseudo-random bit sequence derived from
//!   the strength value - perturbs the embedded bits reproducibly.
//! - A **position filter** selects mid-band carrier units (geometric
//!   frequency for images, sample amplitude for audio), keeping the
//!   embedding out of flat and clipped regions.
//! - The message becomes a **sentinel-terminated bitstream**: one byte per
//!   character, closed by a fixed 16-bit end marker the extractor scans
//!   for.
//! - The embedder writes each masked bit into the least significant bit of
//!   a selected unit; images carry redundant masked copies in the green
//!   and blue channels.
//!
//! The mask is reproducible, not secret: anyone who knows the strength
//! value (or tries all 1000 of them) can recover the message. Maskhide is
//! a concealment codec, not an encryption scheme. Lossy recompression or
//! resizing of the carrier destroys the embedded bits, and only code
//! points up to U+00FF round-trip.
//!
//! ## Example
//!
//! ```rust
//! use maskhide::{hide, reveal, ImageCarrier, RawCarrier};
//!
//! let pixels = vec![0x80u8; 64 * 64 * 4];
//! let mut carrier = RawCarrier::Image(ImageCarrier::new(64, 64, pixels).unwrap());
//!
//! hide(&mut carrier, "HI", 0.5).unwrap();
//!
//! let revealed = reveal(&carrier, 0.5).unwrap();
//! assert_eq!(revealed.message, "HI");
//! ```
//!
//! ## Modules
//!
//! - [`carrier`]: normalized carrier buffers ([`RawCarrier`])
//! - [`mask`]: deterministic mask generation
//! - [`filter`]: carrier position selection
//! - [`bits`]: message/bitstream codec
//! - [`embed`] / [`extract`]: the codec proper
//! - [`api`]: the [`hide`] / [`reveal`] entry points with timing
//! - [`media`]: container decode/encode (PNG/BMP via `image`, WAV via
//!   `hound`)

pub mod api;
pub mod bits;
pub mod carrier;
pub mod embed;
pub mod error;
pub mod extract;
pub mod filter;
pub mod mask;
pub mod media;

pub use api::{hide, reveal, HideReport, RevealReport};
pub use carrier::{AudioCarrier, ImageCarrier, RawCarrier, VideoCarrier};
pub use error::{StegoError, StegoFailure};
pub use mask::MaskProfile;
