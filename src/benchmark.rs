//! # Benchmark Harness
//!
//! Times an encryption strategy end to end with a monotonic clock. The harness only sees
//! the [`EncryptionStrategy`] interface, so it never branches on which strategy it runs.
//!
//! ```
//! use aesecb_rs::benchmark::{benchmark, EncryptionStrategy, Parallel, Sequential};
//! use aesecb_rs::{key_from_bytes, key_schedule};
//!
//! let key = key_schedule(&key_from_bytes(b"62990EB44EB0898D").unwrap());
//! let padded = vec![0u8; 64];
//!
//! let strategies: [&dyn EncryptionStrategy; 2] = [&Sequential, &Parallel::with_workers(2)];
//! let outputs: Vec<_> = strategies
//!     .iter()
//!     .map(|s| benchmark(*s, &padded, &key).unwrap().output)
//!     .collect();
//! assert_eq!(outputs[0], outputs[1]);
//! ```

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use tracing::info;

use crate::cipher::ScheduledKey;
use crate::consts::BLOCK_SIZE;
use crate::encryptor::{encrypt_parallel, encrypt_sequential};
use crate::error::EcbError;
use crate::partition::default_worker_count;

/// One way of turning a padded buffer into ciphertext.
pub trait EncryptionStrategy: Send + Sync {
    /// Short name used in reports.
    fn label(&self) -> &str;

    /// Encrypt the whole padded buffer.
    fn run(&self, input: &[u8], key: &ScheduledKey) -> Result<Vec<u8>, EcbError>;
}

/// Reference strategy: every block on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl EncryptionStrategy for Sequential {
    fn label(&self) -> &str {
        "sequential"
    }

    fn run(&self, input: &[u8], key: &ScheduledKey) -> Result<Vec<u8>, EcbError> {
        encrypt_sequential(input, key)
    }
}

/// Block-partitioned strategy over a fixed number of worker threads.
#[derive(Debug, Clone, Copy)]
pub struct Parallel {
    workers: NonZeroUsize,
}

impl Parallel {
    /// One worker per available hardware execution context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            workers: default_worker_count(),
        }
    }

    /// Explicit worker count; 0 is raised to 1.
    #[must_use]
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers: NonZeroUsize::new(workers).unwrap_or(NonZeroUsize::MIN),
        }
    }

    #[must_use]
    pub const fn workers(&self) -> usize {
        self.workers.get()
    }
}

impl Default for Parallel {
    fn default() -> Self {
        Self::new()
    }
}

impl EncryptionStrategy for Parallel {
    fn label(&self) -> &str {
        "parallel"
    }

    fn run(&self, input: &[u8], key: &ScheduledKey) -> Result<Vec<u8>, EcbError> {
        encrypt_parallel(input, key, input.len() / BLOCK_SIZE, self.workers.get())
    }
}

/// Outcome of one timed run.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub label: String,
    pub elapsed: Duration,
    pub output: Vec<u8>,
}

impl BenchmarkResult {
    /// Elapsed wall-clock time in seconds.
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Run `f` once and return its value with the wall-clock time it took.
#[inline]
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Time one run of `strategy` over `input`.
///
/// Failures of the strategy are returned unchanged; nothing is reported for them.
pub fn benchmark<S>(strategy: &S, input: &[u8], key: &ScheduledKey) -> Result<BenchmarkResult, EcbError>
where
    S: EncryptionStrategy + ?Sized,
{
    let (output, elapsed) = measure(|| strategy.run(input, key));
    let output = output?;

    info!(
        strategy = strategy.label(),
        bytes = input.len(),
        elapsed_secs = elapsed.as_secs_f64(),
        "benchmark finished"
    );

    Ok(BenchmarkResult {
        label: strategy.label().to_owned(),
        elapsed,
        output,
    })
}
