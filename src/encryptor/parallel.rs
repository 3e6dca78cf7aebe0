//! src/encryptor/parallel.rs
//! Fork/join ECB: one task per contiguous block range
//!
//! A fresh pool is built for each call and torn down when it returns. It holds
//! `min(worker_count, hardware contexts)` threads; every range still gets its own task,
//! so a worker count far above the core count only queues more tasks. The input is
//! shared read-only; the output is split into disjoint regions up front, so workers
//! never contend on anything and no locks are taken. The only synchronization point is
//! the end of the scope, which joins every task.

use rayon::ThreadPoolBuilder;
use tracing::{debug, trace};

use crate::cipher::ScheduledKey;
use crate::consts::BLOCK_SIZE;
use crate::encryptor::{block_count, output_buffer};
use crate::error::EcbError;
use crate::partition::{default_worker_count, partition, split_disjoint, split_disjoint_mut};

/// Encrypt `padded` with its blocks partitioned across `worker_count` threads.
///
/// `total_blocks` must equal `padded.len() / 16`. The result is byte-identical to
/// [`encrypt_sequential`](crate::encrypt_sequential) for every worker count, including
/// counts larger than the number of blocks.
pub fn encrypt_parallel(
    padded: &[u8],
    key: &ScheduledKey,
    total_blocks: usize,
    worker_count: usize,
) -> Result<Vec<u8>, EcbError> {
    process_parallel::<false>(padded, key, total_blocks, worker_count)
}

/// Decrypt `ciphertext` with its blocks partitioned across `worker_count` threads.
pub fn decrypt_parallel(
    ciphertext: &[u8],
    key: &ScheduledKey,
    total_blocks: usize,
    worker_count: usize,
) -> Result<Vec<u8>, EcbError> {
    process_parallel::<true>(ciphertext, key, total_blocks, worker_count)
}

fn process_parallel<const DECRYPT: bool>(
    input: &[u8],
    key: &ScheduledKey,
    total_blocks: usize,
    worker_count: usize,
) -> Result<Vec<u8>, EcbError> {
    let actual = block_count(input.len())?;
    if actual != total_blocks {
        return Err(EcbError::BlockCountMismatch {
            declared: total_blocks,
            actual,
        });
    }

    let ranges = partition(total_blocks, worker_count)?;
    let mut output = output_buffer(input.len())?;

    let sources = split_disjoint(input, &ranges, BLOCK_SIZE)?;
    let targets = split_disjoint_mut(&mut output, &ranges, BLOCK_SIZE)?;

    let threads = pool_size(worker_count);
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("ecb-worker-{i}"))
        .build()?;
    debug!(worker_count, threads, total_blocks, "worker pool ready");

    // regions were length-checked by split_disjoint(_mut); tasks cannot fail
    pool.scope(|scope| {
        for ((range, src), dst) in ranges.iter().zip(sources).zip(targets) {
            if range.is_empty() {
                continue;
            }
            scope.spawn(move |_| {
                trace!(start = range.start, end = range.end, "worker processing range");
                key.transform_region::<DECRYPT>(src, dst);
            });
        }
    });

    Ok(output)
}

/// Threads backing a run of `worker_count` tasks: never more than the hardware offers.
#[inline]
fn pool_size(worker_count: usize) -> usize {
    worker_count.clamp(1, default_worker_count().get())
}
