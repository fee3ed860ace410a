//! Table-less CRC-32, one bit at a time.
//!
//! Slow but obviously correct. Used to cross-check the table-driven engine.
//!
//! # Algorithm
//!
//! ```text
//! crc = 0xFFFFFFFF
//! for each byte:
//!   crc ^= byte
//!   repeat 8 times:
//!     crc = (crc >> 1) ^ (POLYNOMIAL if crc & 1 else 0)
//! return !crc
//! ```

use crate::crc::INIT;
use crate::table::POLYNOMIAL;

/// Fold one byte into the register without the lookup table.
#[inline]
pub const fn update_byte(mut crc: u32, byte: u8) -> u32 {
    crc ^= byte as u32;
    let mut bit = 0;
    while bit < 8 {
        // 0x00000000 or 0xFFFFFFFF
        let mask = 0u32.wrapping_sub(crc & 1);
        crc = (crc >> 1) ^ (POLYNOMIAL & mask);
        bit += 1;
    }
    crc
}

/// Compute CRC-32 bit by bit.
///
/// ```
/// use crc32_core::reference::crc32_bitwise;
///
/// assert_eq!(crc32_bitwise(b"123456789"), 0xCBF4_3926);
/// ```
pub fn crc32_bitwise(data: &[u8]) -> u32 {
    !data.iter().fold(INIT, |crc, &byte| update_byte(crc, byte))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc::crc32;

    #[test]
    fn bitwise_known_vectors() {
        assert_eq!(crc32_bitwise(b""), 0);
        assert_eq!(crc32_bitwise(b"Hello World"), 0x4A17_B156);
        assert_eq!(
            crc32_bitwise(b"The quick brown fox jumps over the lazy dog"),
            0x414F_A339
        );
    }

    #[test]
    fn bitwise_matches_table_for_every_byte() {
        for byte in 0..=u8::MAX {
            assert_eq!(crc32_bitwise(&[byte]), crc32(&[byte]), "byte {byte:#04x}");
        }
    }

    #[test]
    fn update_byte_agrees_with_table_entry() {
        // With a zero register, one round is exactly the table entry
        let table = crate::table::build_table();
        for (i, &entry) in table.iter().enumerate() {
            assert_eq!(update_byte(0, i as u8), entry);
        }
    }
}
