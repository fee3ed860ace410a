//! Presentation of a finished CRC-32 value.
//!
//! A [`Checksum`] is just the 32-bit result. It prints as the canonical
//! lowercase 8-hex-digit form used by zlib-compatible tools and parses
//! back from it.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Number of hex digits in the canonical form.
pub const HEX_LEN: usize = 8;

/// A finished CRC-32 checksum.
///
/// ```
/// use crc32_core::Checksum;
///
/// let sum = Checksum::of_str("The quick brown fox jumps over the lazy dog");
/// assert_eq!(sum.value(), 1_095_738_169);
/// assert_eq!(sum.to_string(), "414fa339");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Checksum(u32);

impl Checksum {
    /// Wrap a raw CRC-32 value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Checksum of a byte slice.
    pub fn of(data: &[u8]) -> Self {
        Self(crate::crc::crc32(data))
    }

    /// Checksum of the UTF-8 bytes of `text`.
    pub fn of_str(text: &str) -> Self {
        Self(crate::crc::crc32_str(text))
    }

    /// The integer value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Big-endian bytes, in the order the hex form is written.
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Canonical lowercase hex form, without prefix.
    pub fn to_hex(self) -> String {
        hex::encode(self.to_be_bytes())
    }
}

impl From<u32> for Checksum {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Checksum> for u32 {
    fn from(sum: Checksum) -> Self {
        sum.0
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_hex())
    }
}

// Without an explicit width the hex forms keep all eight digits; with one
// the caller's width, fill and `0` flag apply as for `u32`.
impl fmt::LowerHex for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.width().is_some() {
            return fmt::LowerHex::fmt(&self.0, f);
        }
        if f.alternate() {
            f.write_str("0x")?;
        }
        write!(f, "{:08x}", self.0)
    }
}

impl fmt::UpperHex for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.width().is_some() {
            return fmt::UpperHex::fmt(&self.0, f);
        }
        if f.alternate() {
            f.write_str("0x")?;
        }
        write!(f, "{:08X}", self.0)
    }
}

impl FromStr for Checksum {
    type Err = Error;

    /// Parse exactly eight hex digits, either case, with an optional `0x`.
    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.len() != HEX_LEN {
            return Err(Error::InvalidHex {
                reason: format!("expected {} hex digits, got {}", HEX_LEN, digits.len()),
            });
        }

        let mut bytes = [0u8; 4];
        hex::decode_to_slice(digits, &mut bytes)?;
        Ok(Self(u32::from_be_bytes(bytes)))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Checksum {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Checksum {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
