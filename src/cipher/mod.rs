// src/cipher/mod.rs

//! AES-128 block primitive.
//!
//! The cipher is used strictly one block at a time; chaining, padding and work
//! distribution live in [`crate::padding`], [`crate::partition`] and [`crate::encryptor`].

pub mod key;

pub use key::{key_from_bytes, key_schedule, ScheduledKey};
