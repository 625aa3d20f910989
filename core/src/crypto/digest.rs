//! crypto/digest.rs
//! Identifier derivation from public key bytes.
//!
//! Design notes:
//! - The identifier is the first 32 hex digits of SHA-256(public key), each digit
//!   shifted into the `a..p` alphabet. Character substitution, not base conversion.
//! - The CRX3 crx id is the first 16 raw bytes of the same digest.

use sha2::{Digest as _, Sha256};

use crate::constants::{CRX_ID_CHARS, CRX_ID_LEN, DIGEST_CHARS, ID_LEN};

/// Derive the 32-character identifier for a public key.
///
/// Deterministic and side-effect free; output always matches `[a-p]{32}`.
pub fn derive_id(public_key: &[u8]) -> String {
    let digest = hex::encode(Sha256::digest(public_key));
    translate_digest(digest.as_bytes())
}

/// Derive the 16-byte binary crx id embedded in CRX3 signed header data.
pub fn derive_crx_id(public_key: &[u8]) -> [u8; CRX_ID_LEN] {
    let hash = Sha256::digest(public_key);
    let mut id = [0u8; CRX_ID_LEN];
    id.iter_mut().zip(hash.iter()).for_each(|(dst, src)| *dst = *src);
    id
}

/// Substitute lowercase hex digits position for position, truncated to `ID_LEN`.
/// Characters outside the digest alphabet pass through unchanged.
fn translate_digest(hex_digits: &[u8]) -> String {
    hex_digits
        .iter()
        .take(ID_LEN)
        .map(|&c| match DIGEST_CHARS.iter().position(|&d| d == c) {
            Some(i) => CRX_ID_CHARS[i] as char,
            None => c as char,
        })
        .collect()
}
