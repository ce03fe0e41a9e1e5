// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Content hashing helper utilities.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of an in-memory buffer and return its lowercase hex digest.
///
/// # Examples
///
/// ```
/// let digest = stickerpack::utils::hash_bytes(b"");
/// assert_eq!(digest.len(), 64);
/// ```
pub fn hash_bytes(content: &[u8]) -> String {
    hex::encode(Sha256::digest(content))
}

#[cfg(test)]
mod tests {
    use super::hash_bytes;

    #[test]
    fn hash_bytes_matches_known_digest() {
        assert_eq!(
            hash_bytes(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
