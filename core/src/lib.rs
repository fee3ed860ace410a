//! crc32-core - Table-driven CRC-32 checksum engine.
//!
//! Computes the CRC-32 of arbitrary bytes using the reflected polynomial
//! 0xEDB88320. The result matches zlib, PNG, ZIP, Ethernet and the common
//! scripting-language and web CRC32 packages.
//!
//! This library provides:
//! - A 256-entry lookup table, built once and shared read-only
//! - One-shot and streaming checksum computation
//! - Integer and lowercase-hex presentation of the result
//! - A bitwise reference implementation for cross-checking
//!
//! # Properties
//!
//! - Total: every byte sequence, including the empty one, has a checksum
//! - Deterministic: the same bytes always give the same value
//! - Order-sensitive: reordering bytes changes the result
//! - Text is hashed as its UTF-8 encoding
//!
//! # Constraints
//!
//! This library intentionally does NOT:
//! - Read files or parse arguments
//! - Read environment variables
//! - Split a single message across threads
//!
//! # Example
//!
//! ```
//! use crc32_core::{crc32, crc32_str, Checksum, Crc32};
//!
//! // One-shot
//! assert_eq!(crc32(b""), 0x0000_0000);
//! assert_eq!(crc32_str("Hello World"), 0x4A17_B156);
//!
//! // Integer and hex views of the same value
//! let sum = Checksum::of_str("The quick brown fox jumps over the lazy dog");
//! assert_eq!(sum.value(), 1_095_738_169);
//! assert_eq!(sum.to_string(), "414fa339");
//! assert_eq!("414fa339".parse::<Checksum>().unwrap(), sum);
//!
//! // Streaming gives the same answer
//! let mut crc = Crc32::new();
//! crc.update(b"The quick brown fox ");
//! crc.update(b"jumps over the lazy dog");
//! assert_eq!(crc.checksum(), sum);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod checksum;
pub mod crc;
pub mod error;
pub mod io;
pub mod parallel;
pub mod reference;
pub mod table;

// Re-export main types at crate root
pub use checksum::Checksum;
pub use crc::{crc32, crc32_str, crc32_utf8, ensure, verify, Crc32};
pub use error::{Error, Result};
pub use table::{build_table, table, POLYNOMIAL};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
