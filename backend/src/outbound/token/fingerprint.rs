//! Secret fingerprinting for operational visibility.
//!
//! Operators compare fingerprints to confirm which signing secret is live
//! without the secret itself ever reaching logs.

use sha2::{Digest, Sha256};

/// Length of the fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// Truncated SHA-256 fingerprint of `secret` as 16 lowercase hex characters.
///
/// # Examples
///
/// ```rust
/// use matjip::outbound::token::fingerprint::secret_fingerprint;
///
/// let fp = secret_fingerprint(b"0123456789abcdef0123456789abcdef");
/// assert_eq!(fp.len(), 16);
/// assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn secret_fingerprint(secret: &[u8]) -> String {
    let digest = Sha256::digest(secret);
    hex::encode(digest.iter().take(FINGERPRINT_BYTES).copied().collect::<Vec<u8>>())
}
