//! tests/common.rs
//! Common constants and helpers shared across test files

use aesecb_rs::{key_from_bytes, key_schedule, ScheduledKey};

/// 16-byte key in the form the CLI receives it
#[allow(dead_code)] // Used across multiple test files
pub const TEST_KEY: &[u8; 16] = b"62990EB44EB0898D";

/// Worker counts exercised against every buffer; `total` and `total + 5` are added per case
#[allow(dead_code)] // Used across multiple test files
pub const TEST_WORKER_COUNTS: &[usize] = &[1, 2, 4];

/// Plaintext lengths covering empty, sub-block, aligned and multi-block inputs
#[allow(dead_code)] // Used across multiple test files
pub const TEST_LENGTHS: &[usize] = &[0, 1, 15, 16, 17, 32, 40, 255, 1000, 4099];

#[allow(dead_code)] // Used across multiple test files
pub fn test_key() -> ScheduledKey {
    key_schedule(&key_from_bytes(TEST_KEY).unwrap())
}

/// Deterministic non-repeating-per-block byte pattern
#[allow(dead_code)] // Used across multiple test files
pub fn sample_plaintext(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(31) ^ (i >> 4)) as u8).collect()
}
