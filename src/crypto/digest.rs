//! SHA-1 digest of the signed payload segment.

use sha1::{Digest, Sha1};

/// Length of a SHA-1 digest in bytes.
pub const SHA1_LEN: usize = 20;

/// Compute the SHA-1 digest of the signed text.
///
/// The signature covers the base64 payload segment exactly as it appears in
/// the license key, not the decoded bytes.
pub fn sha1_digest(text: &str) -> [u8; SHA1_LEN] {
    let mut out = [0u8; SHA1_LEN];
    out.copy_from_slice(&Sha1::digest(text.as_bytes()));
    out
}
