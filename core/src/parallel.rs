//! Checksums of independent messages, computed concurrently.
//!
//! A single message is folded strictly left to right and never split.
//! Separate messages share only the read-only lookup table, so a batch
//! is divided into contiguous ranges, one per available core.

use std::num::NonZeroUsize;
use std::thread;

use tracing::debug;

use crate::checksum::Checksum;
use crate::table::table;

/// Checksum every input, spreading the batch over the available cores.
///
/// Results are returned in input order. At most
/// [`thread::available_parallelism`] workers run at once; a range whose
/// worker cannot be spawned is computed on the calling thread.
///
/// ```
/// use crc32_core::{parallel::checksum_each, Checksum};
///
/// let sums = checksum_each(&[b"Hello World".as_slice(), b"".as_slice()]);
/// assert_eq!(sums, vec![Checksum::new(0x4A17_B156), Checksum::new(0)]);
/// ```
pub fn checksum_each(inputs: &[&[u8]]) -> Vec<Checksum> {
    let cores = thread::available_parallelism().map_or(1, NonZeroUsize::get);
    checksum_with_workers(inputs, cores)
}

/// Checksum `inputs` with at most `workers` threads.
fn checksum_with_workers(inputs: &[&[u8]], workers: usize) -> Vec<Checksum> {
    let workers = workers.min(inputs.len());
    let mut sums = vec![Checksum::default(); inputs.len()];
    if workers <= 1 {
        fill(inputs, &mut sums);
        return sums;
    }

    // Build before spawning so workers only ever read
    table();

    let per_worker = inputs.len().div_ceil(workers);
    let mut unspawned = Vec::new();
    thread::scope(|s| {
        let ranges = inputs.chunks(per_worker).zip(sums.chunks_mut(per_worker));
        for (i, (batch, out)) in ranges.enumerate() {
            let spawned = thread::Builder::new().spawn_scoped(s, move || fill(batch, out));
            if let Err(e) = spawned {
                debug!(error = %e, range = i, "worker spawn failed, computing inline");
                unspawned.push(i);
            }
        }
    });

    for i in unspawned {
        let start = i * per_worker;
        let end = (start + per_worker).min(inputs.len());
        fill(&inputs[start..end], &mut sums[start..end]);
    }
    sums
}

fn fill(batch: &[&[u8]], out: &mut [Checksum]) {
    for (input, slot) in batch.iter().zip(out) {
        *slot = Checksum::of(input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc::crc32;

    #[test]
    fn empty_input_list() {
        assert!(checksum_each(&[]).is_empty());
    }

    #[test]
    fn results_keep_input_order() {
        let inputs: Vec<Vec<u8>> = (0..32u8).map(|n| vec![n; usize::from(n) * 7]).collect();
        let slices: Vec<&[u8]> = inputs.iter().map(Vec::as_slice).collect();

        let sums = checksum_each(&slices);
        assert_eq!(sums.len(), inputs.len());
        for (input, sum) in inputs.iter().zip(&sums) {
            assert_eq!(sum.value(), crc32(input));
        }
    }

    #[test]
    fn single_input_runs_inline() {
        let sums = checksum_each(&[b"123456789".as_slice()]);
        assert_eq!(sums, vec![Checksum::new(0xCBF4_3926)]);
    }

    #[test]
    fn many_more_inputs_than_cores() {
        let inputs: Vec<Vec<u8>> = (0..5000u32).map(|n| n.to_le_bytes().to_vec()).collect();
        let slices: Vec<&[u8]> = inputs.iter().map(Vec::as_slice).collect();

        let sums = checksum_each(&slices);
        assert_eq!(sums.len(), 5000);
        for (input, sum) in slices.iter().zip(&sums) {
            assert_eq!(sum.value(), crc32(input));
        }
    }

    #[test]
    fn uneven_ranges_cover_every_input() {
        let inputs: Vec<Vec<u8>> = (0..11u8).map(|n| vec![n; 3]).collect();
        let slices: Vec<&[u8]> = inputs.iter().map(Vec::as_slice).collect();
        let expected: Vec<Checksum> = slices.iter().map(|s| Checksum::of(s)).collect();

        for workers in [1, 2, 3, 4, 10, 11, 64] {
            assert_eq!(checksum_with_workers(&slices, workers), expected, "{workers} workers");
        }
    }
}
