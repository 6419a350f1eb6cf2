//! Nonce generation from the OS secure random source

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::TokenResult;
use crate::NONCE_SIZE;

/// Generate a random 24-byte nonce.
///
/// Uniqueness per key is the caller's contract: a repeated (key, nonce) pair
/// reuses the keystream and forfeits confidentiality. Fails with
/// [`crate::TokenError::EntropyUnavailable`] if the OS entropy source cannot
/// be read.
pub fn generate() -> TokenResult<[u8; NONCE_SIZE]> {
    let mut bytes = [0u8; NONCE_SIZE];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}
