//! src/partition.rs
//! Block-index partitioning for the parallel encryptor
//!
//! A job of `total_blocks` is cut into one contiguous [`BlockRange`] per worker. The
//! ranges are pairwise disjoint and cover `[0, total_blocks)` exactly; the last worker
//! absorbs the remainder of the integer division. With more workers than blocks every
//! range but the last is empty.
//!
//! [`split_disjoint`] and [`split_disjoint_mut`] are the one place ranges are checked
//! against a buffer. Everything downstream works on the returned slices and never
//! indexes by block number again.

use std::num::NonZeroUsize;
use std::ops::Range;

use tracing::{debug, warn};

use crate::error::EcbError;

/// Half-open interval `[start, end)` of block indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockRange {
    pub start: usize,
    pub end: usize,
}

impl BlockRange {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of blocks in the range (0 for empty or reversed ranges).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte offsets covered by this range in a buffer of `block_size`-byte blocks.
    #[must_use]
    pub const fn byte_range(&self, block_size: usize) -> Range<usize> {
        self.start * block_size..self.end * block_size
    }
}

/// Number of hardware execution contexts available to this process, at least 1.
#[must_use]
pub fn default_worker_count() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

/// Split `total_blocks` into `worker_count` contiguous ranges.
///
/// Worker `i` owns `[i * interval, (i + 1) * interval)` with
/// `interval = total_blocks / worker_count`; the last worker owns
/// `[i * interval, total_blocks)`.
pub fn partition(total_blocks: usize, worker_count: usize) -> Result<Vec<BlockRange>, EcbError> {
    if worker_count == 0 {
        return Err(EcbError::InvalidWorkerCount);
    }

    if worker_count > total_blocks {
        warn!(
            total_blocks,
            worker_count, "more workers than blocks; some ranges will be empty"
        );
    }

    let interval = total_blocks / worker_count;
    let last = worker_count - 1;

    let ranges: Vec<BlockRange> = (0..worker_count)
        .map(|i| {
            let start = i * interval;
            let end = if i == last { total_blocks } else { start + interval };
            BlockRange::new(start, end)
        })
        .collect();

    debug!(total_blocks, worker_count, interval, "partitioned block sequence");
    Ok(ranges)
}

/// Check that `ranges` are ascending, contiguous and cover `[0, total_blocks)` exactly.
pub fn validate_ranges(ranges: &[BlockRange], total_blocks: usize) -> Result<(), EcbError> {
    let mut cursor = 0;
    for range in ranges {
        if range.start != cursor || range.end < range.start || range.end > total_blocks {
            return Err(EcbError::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                total_blocks,
            });
        }
        cursor = range.end;
    }

    if cursor != total_blocks {
        return Err(EcbError::RangeOutOfBounds {
            start: cursor,
            end: total_blocks,
            total_blocks,
        });
    }
    Ok(())
}

#[inline]
fn whole_blocks(len: usize, block_size: usize) -> Result<usize, EcbError> {
    if block_size == 0 || len % block_size != 0 {
        return Err(EcbError::UnalignedBuffer { len, block_size });
    }
    Ok(len / block_size)
}

/// Cut a read-only buffer into the regions described by `ranges`.
pub fn split_disjoint<'a>(
    buf: &'a [u8],
    ranges: &[BlockRange],
    block_size: usize,
) -> Result<Vec<&'a [u8]>, EcbError> {
    validate_ranges(ranges, whole_blocks(buf.len(), block_size)?)?;

    let mut rest = buf;
    let mut regions = Vec::with_capacity(ranges.len());
    for range in ranges {
        let (head, tail) = rest.split_at(range.len() * block_size);
        regions.push(head);
        rest = tail;
    }
    Ok(regions)
}

/// Cut a writable buffer into the non-overlapping regions described by `ranges`.
///
/// Each returned slice can be handed to a different worker without locking.
pub fn split_disjoint_mut<'a>(
    buf: &'a mut [u8],
    ranges: &[BlockRange],
    block_size: usize,
) -> Result<Vec<&'a mut [u8]>, EcbError> {
    validate_ranges(ranges, whole_blocks(buf.len(), block_size)?)?;

    let mut rest = buf;
    let mut regions = Vec::with_capacity(ranges.len());
    for range in ranges {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(range.len() * block_size);
        regions.push(head);
        rest = tail;
    }
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_blocks_two_workers() {
        let ranges = partition(3, 2).unwrap();
        assert_eq!(ranges, vec![BlockRange::new(0, 1), BlockRange::new(1, 3)]);
    }

    #[test]
    fn zero_workers_rejected() {
        assert!(matches!(partition(10, 0), Err(EcbError::InvalidWorkerCount)));
    }

    #[test]
    fn split_rejects_gap() {
        let buf = [0u8; 48];
        let ranges = [BlockRange::new(0, 1), BlockRange::new(2, 3)];
        assert!(matches!(
            split_disjoint(&buf, &ranges, 16),
            Err(EcbError::RangeOutOfBounds { start: 2, end: 3, .. })
        ));
    }

    #[test]
    fn split_rejects_short_cover() {
        let mut buf = [0u8; 48];
        let ranges = [BlockRange::new(0, 2)];
        assert!(matches!(
            split_disjoint_mut(&mut buf, &ranges, 16),
            Err(EcbError::RangeOutOfBounds { start: 2, end: 3, total_blocks: 3 })
        ));
    }
}
