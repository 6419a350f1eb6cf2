use thiserror::Error;

pub type TokenResult<T> = Result<T, TokenError>;

/// Failures surfaced by codec construction, encoding, and decoding.
///
/// None of these are retried internally, and no partial plaintext is ever
/// returned alongside one.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The secret key supplied at construction is not exactly 32 bytes.
    #[error("secret key must be 32 bytes, got {actual}")]
    InvalidKeyLength { actual: usize },

    /// Token text is not valid base62, or decodes to fewer bytes than the
    /// minimum envelope size.
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// The decoded version byte does not match the expected magic value.
    #[error("unsupported token version: 0x{actual:02x}")]
    UnsupportedVersion { actual: u8 },

    /// Tag verification failed: tampering, corruption, wrong key, or wrong
    /// keying mode. Intentionally carries no further detail.
    #[error("token authentication failed")]
    AuthenticationFailed,

    /// The OS secure random source could not produce nonce bytes.
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(#[from] rand::Error),
}
