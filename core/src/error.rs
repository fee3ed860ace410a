//! Error types for crc32-core.
//!
//! The checksum engine itself is total: every byte sequence has a CRC.
//! Errors only come from the layers around it.
//!
//! # Error Categories
//!
//! - **Text decoding**: `InvalidUtf8`
//! - **Presentation**: `InvalidHex`
//! - **Verification**: `CrcMismatch`

use thiserror::Error;

/// Result type alias for crc32-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around a checksum computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Text input was not valid UTF-8.
    ///
    /// Raised by the text-decoding layer before any byte reaches the engine.
    #[error("invalid UTF-8 input: valid up to byte {valid_up_to}")]
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },

    /// A checksum string could not be parsed.
    #[error("invalid checksum hex: {reason}")]
    InvalidHex {
        /// Description of what's wrong.
        reason: String,
    },

    /// Computed checksum does not match the expected value.
    #[error("CRC mismatch: expected {expected:#010x}, got {actual:#010x}")]
    CrcMismatch {
        /// Expected CRC value.
        expected: u32,
        /// Actual computed CRC value.
        actual: u32,
    },
}

impl From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Error::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::InvalidHex {
            reason: e.to_string(),
        }
    }
}
