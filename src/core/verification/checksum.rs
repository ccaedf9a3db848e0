//! Checksum calculation for output verification
//!
//! Outputs are fingerprinted when written and fingerprinted again during
//! verification; both sides go through [`calculate_checksum_bytes`].

use sha2::{Digest, Sha256};

/// Calculate SHA-256 checksum of raw bytes
///
/// # Returns
///
/// Returns a hex-encoded SHA-256 checksum string (64 characters).
///
/// # Examples
///
/// ```
/// use phi_surrogates::core::verification::checksum::calculate_checksum_bytes;
///
/// let checksum = calculate_checksum_bytes(b"Seen at Mercy Hospital.");
/// assert_eq!(checksum.len(), 64);
/// ```
pub fn calculate_checksum_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    format!("{result:x}")
}
