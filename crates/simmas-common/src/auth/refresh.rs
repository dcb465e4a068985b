//! Opaque refresh-token generation
//!
//! Refresh tokens are deliberately not JWTs: they carry no claims, cannot
//! be parsed, and are worthless without the server-side store that maps
//! them to a session.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::rngs::OsRng;
use rand::RngCore;

/// Entropy per token, before encoding
const REFRESH_TOKEN_BYTES: usize = 40;

/// Generate a cryptographically random opaque token string
#[must_use]
pub fn generate_refresh_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
