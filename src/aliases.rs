//! # Secure-Gate Type Aliases
//!
//! Key material is held in [`secure-gate`](https://github.com/Slurp9187/secure-gate) wrappers:
//! zeroized on drop and only readable through an explicit `.expose_secret()`.
//!
//! - [`RawKey16`] - 16-byte AES-128 key as supplied by the caller
//! - [`AesBlock`] - one 16-byte block in the layout the `aes` crate operates on

use crate::consts::KEY_SIZE;

/// Caller-supplied AES-128 key bytes.
pub type RawKey16 = secure_gate::Fixed<[u8; KEY_SIZE]>;

/// A single cipher block (`GenericArray<u8, U16>`).
pub type AesBlock = aes::Block;
