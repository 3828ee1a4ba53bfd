//! Content hashing of puzzle folders

use crate::error::HashError;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use walkdir::WalkDir;

const CHUNK_SIZE: usize = 4096;

/// Digest every file under `path` recursively into one SHA-256 hex string.
///
/// Entries are visited in sorted order so the digest depends only on file
/// names and contents, never on filesystem iteration order. The digest is
/// the cache-correctness invariant: identical folder contents must always
/// produce the identical string.
pub fn hash_folder(path: &Path) -> Result<String, HashError> {
    if !path.exists() {
        return Err(HashError::NotFound(path.to_path_buf()));
    }

    let mut hasher = Sha256::new();
    let mut buf = [0u8; CHUNK_SIZE];

    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let mut file = File::open(entry.path())?;
        loop {
            let n = file.read(&mut buf)?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }
    }

    Ok(format!("{:x}", hasher.finalize()))
}
