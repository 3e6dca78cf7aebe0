//! # Error Types
//!
//! All fallible operations return [`Result<T, EcbError>`](EcbError). Every variant maps
//! to the pipeline [`Stage`] it originates from, so a failed run can say where it stopped.

use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

/// The error type for all encryption, partitioning and file operations.
#[derive(Error, Debug)]
pub enum EcbError {
    /// I/O error while reading the plaintext or persisting a ciphertext.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A buffer could not be allocated (plaintext too large for memory).
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// The raw key does not have the length required by the cipher.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// A buffer handed to the block transform is not a whole number of blocks.
    #[error("buffer length {len} is not a multiple of the {block_size}-byte block size")]
    UnalignedBuffer { len: usize, block_size: usize },

    /// PKCS#7 padding is missing or malformed.
    #[error("invalid padding: {0}")]
    InvalidPadding(String),

    /// A partition was requested with zero workers.
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,

    /// The declared block count does not describe the buffer being encrypted.
    #[error("block count mismatch: buffer holds {actual} blocks, caller declared {declared}")]
    BlockCountMismatch { declared: usize, actual: usize },

    /// A block range is reversed, overlaps its neighbour, leaves a gap, or runs past the buffer.
    #[error("block range [{start}, {end}) is invalid for {total_blocks} blocks")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        total_blocks: usize,
    },

    /// The worker pool for a parallel run could not be created.
    #[error("worker pool error: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    /// Sequential and parallel strategies disagreed on the ciphertext.
    #[error("ciphertext mismatch between {left} and {right} runs")]
    OutputMismatch { left: String, right: String },
}

/// Pipeline stage an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Key,
    Allocation,
    Padding,
    Partition,
    Encryption,
    Io,
}

impl EcbError {
    /// The stage that failed.
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            EcbError::Io(_) => Stage::Io,
            EcbError::InvalidKeyLength { .. } => Stage::Key,
            EcbError::Allocation(_) => Stage::Allocation,
            EcbError::InvalidPadding(_) => Stage::Padding,
            EcbError::InvalidWorkerCount | EcbError::RangeOutOfBounds { .. } => Stage::Partition,
            EcbError::UnalignedBuffer { .. }
            | EcbError::BlockCountMismatch { .. }
            | EcbError::WorkerPool(_)
            | EcbError::OutputMismatch { .. } => Stage::Encryption,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Key => "key",
            Stage::Allocation => "allocation",
            Stage::Padding => "padding",
            Stage::Partition => "partition",
            Stage::Encryption => "encryption",
            Stage::Io => "I/O",
        };
        f.write_str(name)
    }
}
