//! Content hashing using SHA-256

use crate::error::ManifestError;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Algorithm name written in front of every hash in the manifest.
pub const HASH_ALGORITHM: &str = "sha256";

/// Read buffer size for streaming file content.
const CHUNK_SIZE: usize = 1024 * 1024;

/// Result of streaming a file through the hasher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDigest {
    /// Lowercase hex digest
    pub hex: String,
    /// Bytes consumed from the stream
    pub bytes_read: u64,
}

/// Hash a file's content in fixed-size chunks.
///
/// The handle is dropped on every exit path, including read errors.
pub fn hash_file(path: &Path) -> Result<ContentDigest, ManifestError> {
    let file = File::open(path).map_err(|e| ManifestError::io(path, e))?;
    hash_reader(file).map_err(|e| ManifestError::io(path, e))
}

/// Hash everything readable from `reader`.
pub fn hash_reader<R: Read>(mut reader: R) -> io::Result<ContentDigest> {
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut bytes_read = 0u64;

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..n]);
        bytes_read += n as u64;
    }

    Ok(ContentDigest {
        hex: hex::encode(hasher.finalize()),
        bytes_read,
    })
}

/// Hash an in-memory buffer.
pub fn compute_content_hash(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content))
}
