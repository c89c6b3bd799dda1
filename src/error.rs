//! Error types for hiding and revealing messages.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while hiding or revealing a message.
#[derive(Error, Debug)]
pub enum StegoError {
    /// The encoded message (including the end marker) does not fit in the
    /// carrier. The display string is the user-facing message.
    #[error("{0}")]
    CapacityExceeded(String),

    /// The carrier is not a supported image, audio, or video container.
    #[error("Unsupported carrier: {0}")]
    UnsupportedCarrier(String),

    /// The container decoder rejected the carrier bytes.
    #[error("Carrier decode error: {0}")]
    CarrierDecode(String),

    /// Unexpected internal failure (e.g. buffer geometry mismatch).
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A failed hide or reveal, together with how long it ran before failing.
///
/// Successes report elapsed time the same way, so callers can observe
/// timing regardless of outcome.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct StegoFailure {
    /// What went wrong.
    pub error: StegoError,
    /// Wall-clock time spent before the failure.
    pub elapsed: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_error_displays_bare_message() {
        let err = StegoError::CapacityExceeded("Message too long for this image".into());
        assert_eq!(err.to_string(), "Message too long for this image");
    }

    #[test]
    fn failure_displays_inner_error() {
        let failure = StegoFailure {
            error: StegoError::UnsupportedCarrier("pdf".into()),
            elapsed: Duration::from_millis(3),
        };
        assert_eq!(failure.to_string(), "Unsupported carrier: pdf");
    }
}
