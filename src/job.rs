//! src/job.rs
//! End-to-end comparison run: read, pad, time both strategies, verify, persist

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{info, warn};

use crate::benchmark::{benchmark, Parallel, Sequential};
use crate::cipher::{key_from_bytes, key_schedule};
use crate::consts::{DEFAULT_PARALLEL_OUTPUT, DEFAULT_SEQUENTIAL_OUTPUT, PADDING_BLOCK_SIZE};
use crate::error::EcbError;
use crate::file_io::{discard_ciphertext, read_plaintext, write_ciphertext};
use crate::padding::pad;
use crate::partition::default_worker_count;

/// Settings for a comparison run.
///
/// Defaults: one worker per hardware execution context, outputs
/// [`DEFAULT_SEQUENTIAL_OUTPUT`] and [`DEFAULT_PARALLEL_OUTPUT`] in the working directory.
#[derive(Debug, Clone)]
pub struct JobConfig {
    workers: NonZeroUsize,
    sequential_output: PathBuf,
    parallel_output: PathBuf,
}

impl JobConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            workers: default_worker_count(),
            sequential_output: PathBuf::from(DEFAULT_SEQUENTIAL_OUTPUT),
            parallel_output: PathBuf::from(DEFAULT_PARALLEL_OUTPUT),
        }
    }

    /// Override the worker count of the parallel run (minimum 1).
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = NonZeroUsize::new(workers).unwrap_or(NonZeroUsize::MIN);
        self
    }

    #[must_use]
    pub fn with_sequential_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.sequential_output = path.into();
        self
    }

    #[must_use]
    pub fn with_parallel_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.parallel_output = path.into();
        self
    }

    #[must_use]
    pub const fn workers(&self) -> usize {
        self.workers.get()
    }

    #[must_use]
    pub fn sequential_output(&self) -> &Path {
        &self.sequential_output
    }

    #[must_use]
    pub fn parallel_output(&self) -> &Path {
        &self.parallel_output
    }
}

impl Default for JobConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Timing of one strategy within a job.
#[derive(Debug, Clone, PartialEq)]
pub struct RunTiming {
    pub label: String,
    pub elapsed: Duration,
}

impl RunTiming {
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Summary of a completed comparison run.
#[derive(Debug, Clone)]
pub struct JobReport {
    pub plaintext_len: usize,
    pub ciphertext_len: usize,
    pub workers: usize,
    pub sequential: RunTiming,
    pub parallel: RunTiming,
}

/// Encrypt the file at `input` with both strategies and persist both ciphertexts.
///
/// The key is validated before anything is scheduled. Outputs are written only after
/// the two ciphertexts have been compared equal; if persisting the second file fails
/// the first is removed again, so a failed job leaves neither behind.
pub fn run_job(
    input: impl AsRef<Path>,
    raw_key: &[u8],
    config: &JobConfig,
) -> Result<JobReport, EcbError> {
    let raw_key = key_from_bytes(raw_key)?;
    let plaintext = read_plaintext(input)?;
    let key = key_schedule(&raw_key);

    let plaintext_len = plaintext.len();
    let padded = pad(&plaintext, PADDING_BLOCK_SIZE)?;
    drop(plaintext);
    info!(
        plaintext = plaintext_len,
        padded = padded.len(),
        workers = config.workers(),
        "starting comparison"
    );

    let seq = benchmark(&Sequential, &padded, &key)?;
    let par = benchmark(&Parallel::with_workers(config.workers()), &padded, &key)?;

    if seq.output != par.output {
        return Err(EcbError::OutputMismatch {
            left: seq.label,
            right: par.label,
        });
    }

    write_ciphertext(config.sequential_output(), &seq.output)?;
    if let Err(e) = write_ciphertext(config.parallel_output(), &par.output) {
        warn!(error = %e, "parallel output failed; removing sequential output");
        discard_ciphertext(config.sequential_output())?;
        return Err(e);
    }

    Ok(JobReport {
        plaintext_len,
        ciphertext_len: seq.output.len(),
        workers: config.workers(),
        sequential: RunTiming {
            label: seq.label,
            elapsed: seq.elapsed,
        },
        parallel: RunTiming {
            label: par.label,
            elapsed: par.elapsed,
        },
    })
}
