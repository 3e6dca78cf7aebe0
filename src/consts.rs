//! # Constants
//!
//! This module defines the fixed cipher geometry and the default output locations
//! used by the command-line benchmark.

use std::num::NonZeroU8;

/// AES block size in bytes.
///
/// Every padded buffer and every ciphertext produced by this crate is a multiple
/// of this value.
pub const BLOCK_SIZE: usize = 16;

/// AES block size as a padding parameter.
///
/// PKCS#7 pad bytes encode their own count, so the block size must fit in a byte.
pub const PADDING_BLOCK_SIZE: NonZeroU8 = match NonZeroU8::new(BLOCK_SIZE as u8) {
    Some(n) => n,
    None => panic!("block size must be non-zero"),
};

/// Raw key length in bytes (AES-128).
pub const KEY_SIZE: usize = 16;

/// Default file name for the ciphertext produced by the sequential run.
pub const DEFAULT_SEQUENTIAL_OUTPUT: &str = "encrypted_sequential.txt";

/// Default file name for the ciphertext produced by the parallel run.
pub const DEFAULT_PARALLEL_OUTPUT: &str = "encrypted_parallel.txt";
