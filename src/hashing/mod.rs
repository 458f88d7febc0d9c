//! Content fingerprinting for upload deduplication.
//!
//! Fingerprints are full SHA-256 digests of the raw file bytes, rendered as
//! lowercase hex. Identical byte content always yields an identical fingerprint,
//! independent of filename or upload time.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

/// Chunk size for streaming file reads.
const HASH_CHUNK_SIZE: usize = 8192;

/// Computes the SHA-256 fingerprint of a file, streaming its content in
/// fixed-size chunks so the file is never held in memory twice.
pub fn fingerprint_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; HASH_CHUNK_SIZE];

    loop {
        let read = file.read(&mut buf)?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Computes the SHA-256 fingerprint of an in-memory byte slice.
///
/// Equivalent to [`fingerprint_file`] over a file with the same content.
pub fn fingerprint_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
