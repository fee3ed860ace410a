//! CRC-32 lookup table construction.
//!
//! Each entry holds the result of running one byte value through eight
//! rounds of bit-level reduction by the reflected polynomial. The engine
//! then folds a whole byte with a single lookup instead of eight branches.

use std::sync::OnceLock;

use tracing::debug;

/// CRC-32 polynomial (reflected form of 0x04C11DB7).
pub const POLYNOMIAL: u32 = 0xEDB8_8320;

/// Number of entries in the lookup table, one per byte value.
pub const TABLE_SIZE: usize = 256;

/// Process-wide table, written once on first use.
static TABLE: OnceLock<[u32; TABLE_SIZE]> = OnceLock::new();

/// Build the CRC-32 lookup table.
///
/// Pure and deterministic; usable in const context.
///
/// ```
/// use crc32_core::table::build_table;
///
/// let table = build_table();
/// assert_eq!(table[1], 0x7707_3096);
/// ```
pub const fn build_table() -> [u32; TABLE_SIZE] {
    let mut table = [0u32; TABLE_SIZE];
    let mut i = 0;
    while i < TABLE_SIZE {
        table[i] = reduce_byte(i as u32);
        i += 1;
    }
    table
}

/// Run eight rounds of reflected reduction over a single byte value.
const fn reduce_byte(byte: u32) -> u32 {
    let mut rem = byte;
    let mut bit = 0;
    while bit < 8 {
        if rem & 1 != 0 {
            rem = (rem >> 1) ^ POLYNOMIAL;
        } else {
            rem >>= 1;
        }
        bit += 1;
    }
    rem
}

/// Shared lookup table.
///
/// Built on the first call; every later call, from any thread, gets the
/// same immutable table.
pub fn table() -> &'static [u32; TABLE_SIZE] {
    TABLE.get_or_init(|| {
        let table = build_table();
        debug!(entries = TABLE_SIZE, "built CRC-32 lookup table");
        table
    })
}
