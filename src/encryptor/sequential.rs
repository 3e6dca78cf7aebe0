//! src/encryptor/sequential.rs
//! Single-threaded reference path: blocks in ascending index order

use crate::cipher::ScheduledKey;
use crate::encryptor::{block_count, output_buffer};
use crate::error::EcbError;

/// Encrypt every block of `padded` on the calling thread.
///
/// Returns [`EcbError::UnalignedBuffer`] if `padded` is not a whole number of blocks.
#[inline]
pub fn encrypt_sequential(padded: &[u8], key: &ScheduledKey) -> Result<Vec<u8>, EcbError> {
    process_sequential::<false>(padded, key)
}

/// Decrypt every block of `ciphertext` on the calling thread.
#[inline]
pub fn decrypt_sequential(ciphertext: &[u8], key: &ScheduledKey) -> Result<Vec<u8>, EcbError> {
    process_sequential::<true>(ciphertext, key)
}

fn process_sequential<const DECRYPT: bool>(
    input: &[u8],
    key: &ScheduledKey,
) -> Result<Vec<u8>, EcbError> {
    block_count(input.len())?;

    let mut output = output_buffer(input.len())?;
    key.transform_region::<DECRYPT>(input, &mut output);

    Ok(output)
}
