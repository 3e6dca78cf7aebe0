//! src/padding.rs
//! PKCS#7 padding for block-aligned encryption
//!
//! Padding is always added: an already aligned plaintext gains one full block whose
//! bytes all equal the block size. Only the tail is filled; plaintext bytes are never
//! touched.

use std::num::NonZeroU8;

use crate::error::EcbError;

/// Result of a padding calculation for one plaintext length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    /// Length of the padded buffer; always a multiple of the block size.
    pub padded_len: usize,
    /// Value of every pad byte, which is also the number of pad bytes (1..=block_size).
    pub pad_byte: u8,
}

impl Padding {
    /// Number of bytes appended to the plaintext.
    #[must_use]
    pub const fn pad_len(&self) -> usize {
        self.pad_byte as usize
    }
}

/// Compute the padded length and pad byte value for a plaintext of `plaintext_len` bytes.
///
/// `plaintext_len` is a buffer length, so `plaintext_len + block_size` cannot overflow.
#[inline]
#[must_use]
pub const fn compute_padding(plaintext_len: usize, block_size: NonZeroU8) -> Padding {
    let block = block_size.get() as usize;
    let pad = block - plaintext_len % block;
    Padding {
        padded_len: plaintext_len + pad,
        // pad is in 1..=block and block fits in u8
        pad_byte: pad as u8,
    }
}

/// Copy `plaintext` into a fresh buffer and append PKCS#7 padding.
///
/// The buffer is reserved up front with a fallible allocation, so an input too large
/// for memory surfaces as [`EcbError::Allocation`] instead of aborting.
pub fn pad(plaintext: &[u8], block_size: NonZeroU8) -> Result<Vec<u8>, EcbError> {
    let padding = compute_padding(plaintext.len(), block_size);

    let mut padded = Vec::new();
    padded.try_reserve_exact(padding.padded_len)?;
    padded.extend_from_slice(plaintext);
    padded.resize(padding.padded_len, padding.pad_byte);

    Ok(padded)
}

/// Validate and strip PKCS#7 padding, returning the original plaintext.
pub fn unpad(padded: &[u8], block_size: NonZeroU8) -> Result<&[u8], EcbError> {
    let block = block_size.get() as usize;
    if padded.len() % block != 0 {
        return Err(EcbError::UnalignedBuffer {
            len: padded.len(),
            block_size: block,
        });
    }

    let Some(&last) = padded.last() else {
        return Err(EcbError::InvalidPadding("empty buffer".into()));
    };

    let pad = usize::from(last);
    if pad == 0 || pad > block {
        return Err(EcbError::InvalidPadding(format!(
            "pad byte {last:#04x} outside 1..={block}"
        )));
    }

    let (plaintext, tail) = padded.split_at(padded.len() - pad);
    if tail.iter().any(|&b| b != last) {
        return Err(EcbError::InvalidPadding(format!(
            "expected {pad} trailing bytes of {last:#04x}"
        )));
    }

    Ok(plaintext)
}
