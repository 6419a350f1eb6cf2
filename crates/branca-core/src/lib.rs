//! branca-core: authenticated, encrypted, URL-safe tokens
//!
//! A token is a fixed binary envelope rendered as base62 text:
//!
//! ```text
//! [1 byte: version 0xBA][4 bytes: BE unix seconds][24 bytes: nonce]
//! [N bytes: XChaCha20 ciphertext][16 bytes: Poly1305 tag]
//! ```
//!
//! The payload is encrypted with XChaCha20 under a 256-bit secret key; the
//! Poly1305 tag authenticates the 29-byte header, which stays in the clear.
//! Decoding validates in a fixed order: base62 alphabet, version byte,
//! minimum length, tag (constant-time), and only then decrypts.
//!
//! The embedded timestamp is exposed, not enforced — expiry policy belongs
//! to the caller, see [`TokenCodec::timestamp`].

pub mod base62;
pub mod error;
pub mod key;
pub mod nonce;
pub mod time;
pub mod token;

pub use branca_crypto::{MacKeying, KEY_SIZE, NONCE_SIZE, TAG_SIZE};
pub use error::{TokenError, TokenResult};
pub use key::SecretKey;
pub use time::{SystemClock, TimeSource};
pub use token::TokenCodec;

/// Magic byte identifying the token format
pub const VERSION: u8 = 0xBA;

/// Version byte + timestamp + nonce
pub const HEADER_SIZE: usize = 1 + 4 + NONCE_SIZE;

/// Smallest valid envelope: a header and a tag around an empty payload
pub const MIN_ENVELOPE_SIZE: usize = HEADER_SIZE + TAG_SIZE;
