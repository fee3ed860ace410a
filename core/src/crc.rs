//! CRC-32 checksum engine.
//!
//! Folds bytes through the shared lookup table, one lookup per byte.
//! Same result as zlib's `crc32`, PNG, ZIP and Ethernet.

use std::io;

use tracing::debug;

use crate::checksum::Checksum;
use crate::error::{Error, Result};
use crate::table::table;

/// Initial register value, also the final XOR mask.
pub const INIT: u32 = 0xFFFF_FFFF;

/// Fold `data` into a running register.
#[inline]
fn fold(mut crc: u32, data: &[u8]) -> u32 {
    let table = table();
    for &byte in data {
        let index = ((crc ^ u32::from(byte)) & 0xFF) as usize;
        crc = (crc >> 8) ^ table[index];
    }
    crc
}

/// Compute CRC-32 checksum of data.
///
/// ```
/// use crc32_core::crc32;
///
/// assert_eq!(crc32(b""), 0);
/// assert_eq!(crc32(b"Hello World"), 0x4A17_B156);
/// ```
#[inline]
pub fn crc32(data: &[u8]) -> u32 {
    !fold(INIT, data)
}

/// Compute CRC-32 of the UTF-8 encoding of `text`.
///
/// Characters above U+007F contribute more than one byte.
#[inline]
pub fn crc32_str(text: &str) -> u32 {
    crc32(text.as_bytes())
}

/// Compute CRC-32 of bytes that must be valid UTF-8 text.
///
/// The engine never fails; this rejects malformed text before hashing it.
pub fn crc32_utf8(bytes: &[u8]) -> Result<u32> {
    let text = std::str::from_utf8(bytes)?;
    Ok(crc32_str(text))
}

/// Verify CRC-32 checksum matches expected value.
#[inline]
pub fn verify(data: &[u8], expected: u32) -> bool {
    crc32(data) == expected
}

/// Like [`verify`], but reports the mismatch as an error.
pub fn ensure(data: &[u8], expected: u32) -> Result<()> {
    let actual = crc32(data);
    if actual != expected {
        debug!(
            expected = %Checksum::new(expected),
            actual = %Checksum::new(actual),
            len = data.len(),
            "CRC-32 mismatch"
        );
        return Err(Error::CrcMismatch { expected, actual });
    }
    Ok(())
}

/// Streaming CRC-32 accumulator.
///
/// Feeding a message in pieces gives the same result as [`crc32`] on the
/// whole message.
///
/// ```
/// use crc32_core::{crc32, Crc32};
///
/// let mut crc = Crc32::new();
/// crc.update(b"Hello ");
/// crc.update(b"World");
/// assert_eq!(crc.finalize(), crc32(b"Hello World"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crc32 {
    state: u32,
}

impl Crc32 {
    /// Fresh accumulator.
    pub const fn new() -> Self {
        Self { state: INIT }
    }

    /// Fold more bytes in.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        self.state = fold(self.state, data);
    }

    /// Checksum of everything fed so far.
    ///
    /// Does not consume the accumulator; more bytes may follow.
    pub const fn finalize(&self) -> u32 {
        !self.state
    }

    /// [`Self::finalize`] as a [`Checksum`].
    pub const fn checksum(&self) -> Checksum {
        Checksum::new(self.finalize())
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        self.state = INIT;
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl io::Write for Crc32 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
