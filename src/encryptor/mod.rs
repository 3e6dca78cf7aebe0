// src/encryptor/mod.rs

//! ECB encryption over whole padded buffers.
//!
//! Core API: `encrypt_sequential(&padded, &key)?` and
//! `encrypt_parallel(&padded, &key, total_blocks, workers)?`, plus their inverses.
//! Both strategies produce byte-identical output for any worker count.

pub(crate) mod parallel;
pub(crate) mod sequential;

pub use parallel::{decrypt_parallel, encrypt_parallel};
pub use sequential::{decrypt_sequential, encrypt_sequential};

use crate::consts::BLOCK_SIZE;
use crate::error::EcbError;

/// Number of whole blocks in a buffer of `len` bytes.
#[inline]
pub(crate) fn block_count(len: usize) -> Result<usize, EcbError> {
    if len % BLOCK_SIZE != 0 {
        return Err(EcbError::UnalignedBuffer {
            len,
            block_size: BLOCK_SIZE,
        });
    }
    Ok(len / BLOCK_SIZE)
}

/// Zeroed output buffer of `len` bytes, allocated fallibly.
#[inline]
pub(crate) fn output_buffer(len: usize) -> Result<Vec<u8>, EcbError> {
    let mut output = Vec::new();
    output.try_reserve_exact(len)?;
    output.resize(len, 0);
    Ok(output)
}
