//! Version identifier derivation.
//!
//! The version is a digest over every included file's path, hash and size,
//! fed in manifest order:
//!
//! `sha256( path \0 hash \0 size \n  ...  )`
//!
//! truncated to the first 16 hex characters and prefixed with `auto-`.

use crate::types::FileEntry;
use sha2::{Digest, Sha256};

/// Prefix of every derived version identifier.
pub const VERSION_PREFIX: &str = "auto-";

/// Hex characters of the digest kept in the identifier.
pub const VERSION_HEX_LEN: usize = 16;

/// Fold the (already sorted) entries into a version identifier.
pub fn derive_version(files: &[FileEntry]) -> String {
    let mut digest = Sha256::new();
    for file in files {
        digest.update(file.path.as_bytes());
        digest.update(b"\0");
        digest.update(file.hash.as_bytes());
        digest.update(b"\0");
        digest.update(file.size.to_string().as_bytes());
        digest.update(b"\n");
    }
    let hex = hex::encode(digest.finalize());
    format!("{}{}", VERSION_PREFIX, &hex[..VERSION_HEX_LEN])
}
