//! Content fingerprints
//!
//! Load/save offers no isolation: two callers racing on the same key is a
//! read-modify-write race. Record types that need compare-and-swap embed a
//! fingerprint of the content they read and check it before saving. This
//! module is the hash they use.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use sha2::{Digest, Sha256};

/// URL-safe base64 of the SHA-256 digest of `text`.
pub fn fingerprint(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    URL_SAFE.encode(digest)
}
