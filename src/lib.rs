// src/lib.rs

//! AES-128 ECB file encryption, sequential and block-parallel.
//!
//! The padded buffer is encrypted either on one thread ([`encrypt_sequential`]) or split
//! into contiguous, disjoint block ranges that a fresh pool of worker threads encrypts
//! concurrently ([`encrypt_parallel`]). Both paths give byte-identical ciphertext.
//! [`benchmark`](benchmark::benchmark) times either one behind the
//! [`EncryptionStrategy`](benchmark::EncryptionStrategy) interface.
//!
//! ECB leaks plaintext block equality. This crate measures parallel speed-up; it is not
//! a recommendation for protecting data.
//!
//! ```
//! use aesecb_rs::consts::PADDING_BLOCK_SIZE;
//! use aesecb_rs::{encrypt_parallel, encrypt_sequential, key_from_bytes, key_schedule, pad};
//!
//! let key = key_schedule(&key_from_bytes(b"62990EB44EB0898D")?);
//! let padded = pad(&[7u8; 40], PADDING_BLOCK_SIZE)?;
//! assert_eq!(padded.len(), 48);
//!
//! let seq = encrypt_sequential(&padded, &key)?;
//! let par = encrypt_parallel(&padded, &key, 3, 2)?;
//! assert_eq!(seq, par);
//! # Ok::<(), aesecb_rs::EcbError>(())
//! ```

pub mod aliases;
pub mod benchmark;
pub mod cipher;
pub mod consts;
pub mod encryptor;
pub mod error;
pub mod file_io;
pub mod job;
pub mod padding;
pub mod partition;

// High-level API
pub use cipher::{key_from_bytes, key_schedule, ScheduledKey};
pub use encryptor::{decrypt_parallel, decrypt_sequential, encrypt_parallel, encrypt_sequential};
pub use error::{EcbError, Stage};
pub use job::{run_job, JobConfig, JobReport};
pub use padding::{compute_padding, pad, unpad, Padding};
pub use partition::{default_worker_count, partition, BlockRange};
