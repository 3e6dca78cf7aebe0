//! src/file_io.rs
//! Whole-file plaintext input and crash-safe ciphertext output
//!
//! Ciphertext is written to a temporary file next to the destination and renamed into
//! place only after every byte reached it, so an interrupted or failed run never leaves
//! a truncated file under the final name.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::EcbError;

/// Read the entire file at `path` into memory.
pub fn read_plaintext(path: impl AsRef<Path>) -> Result<Vec<u8>, EcbError> {
    let path = path.as_ref();
    let mut file = File::open(path)?;

    let len = file.metadata().map_or(0, |m| reserve_len(m.len()));
    let mut plaintext = Vec::new();
    plaintext.try_reserve_exact(len)?;
    file.read_to_end(&mut plaintext)?;

    debug!(path = %path.display(), bytes = plaintext.len(), "plaintext loaded");
    Ok(plaintext)
}

/// Bytes to reserve for a file of `file_len` bytes.
///
/// A length that does not fit in `usize` saturates, so the reservation fails with
/// [`EcbError::Allocation`] instead of wrapping to a small buffer.
#[inline]
fn reserve_len(file_len: u64) -> usize {
    usize::try_from(file_len).unwrap_or(usize::MAX)
}

/// Write `ciphertext` to `path` in one operation, replacing any existing file.
pub fn write_ciphertext(path: impl AsRef<Path>, ciphertext: &[u8]) -> Result<(), EcbError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(ciphertext)?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| EcbError::Io(e.error))?;

    debug!(path = %path.display(), bytes = ciphertext.len(), "ciphertext persisted");
    Ok(())
}

/// Remove a previously written ciphertext, ignoring a missing file.
pub fn discard_ciphertext(path: impl AsRef<Path>) -> Result<(), EcbError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(EcbError::Io(e)),
    }
}
