//! src/cipher/key.rs
//! Key validation and AES-128 key schedule

use std::fmt;

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes128;
use secure_gate::RevealSecret;

use crate::aliases::{AesBlock, RawKey16};
use crate::consts::{BLOCK_SIZE, KEY_SIZE};
use crate::error::EcbError;

/// Validate raw key bytes and move them into a zeroizing buffer.
///
/// The bytes are taken as-is: no encoding, no truncation, no stretching.
pub fn key_from_bytes(raw: &[u8]) -> Result<RawKey16, EcbError> {
    let bytes: [u8; KEY_SIZE] = raw.try_into().map_err(|_| EcbError::InvalidKeyLength {
        expected: KEY_SIZE,
        actual: raw.len(),
    })?;
    Ok(RawKey16::new(bytes))
}

/// Expand a validated key into AES-128 round keys.
#[inline]
#[must_use]
pub fn key_schedule(raw: &RawKey16) -> ScheduledKey {
    ScheduledKey::new(raw)
}

/// AES-128 round keys, ready for block encryption and decryption.
///
/// Read-only after construction, so one instance is shared by every worker of a
/// parallel run.
#[derive(Clone)]
pub struct ScheduledKey {
    cipher: Aes128,
}

impl ScheduledKey {
    #[must_use]
    pub fn new(raw: &RawKey16) -> Self {
        Self {
            cipher: Aes128::new(raw.expose_secret().into()),
        }
    }

    /// Encrypt a single block.
    #[inline]
    #[must_use]
    pub fn encrypt_block(&self, input: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut block = AesBlock::from(*input);
        self.cipher.encrypt_block(&mut block);
        block.into()
    }

    /// Decrypt a single block.
    #[inline]
    #[must_use]
    pub fn decrypt_block(&self, input: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut block = AesBlock::from(*input);
        self.cipher.decrypt_block(&mut block);
        block.into()
    }

    /// Transform every whole block of `input` into the matching position of `output`.
    ///
    /// Callers pass regions of equal, block-aligned length; `chunks_exact` keeps the
    /// loop free of per-block bounds checks.
    #[inline(always)]
    pub(crate) fn transform_region<const DECRYPT: bool>(&self, input: &[u8], output: &mut [u8]) {
        for (src, dst) in input
            .chunks_exact(BLOCK_SIZE)
            .zip(output.chunks_exact_mut(BLOCK_SIZE))
        {
            let src = AesBlock::from_slice(src);
            let dst = AesBlock::from_mut_slice(dst);
            if DECRYPT {
                self.cipher.decrypt_block_b2b(src, dst);
            } else {
                self.cipher.encrypt_block_b2b(src, dst);
            }
        }
    }
}

impl fmt::Debug for ScheduledKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScheduledKey { .. }")
    }
}
