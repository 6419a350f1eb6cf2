//! branca-crypto: the authenticated-encryption construction behind branca tokens
//!
//! XChaCha20 stream encryption plus a Poly1305 tag computed over the
//! associated data (the token header). The ciphertext has the same length as
//! the plaintext; the tag does not cover it.
//!
//! ```text
//! ciphertext = plaintext XOR XChaCha20(key, nonce)
//! tag        = Poly1305(mac_key, aad)                     // 16 bytes
//! mac_key    = key                                        (MacKeying::RawKey)
//!            | first 32 keystream bytes of (key, nonce)   (MacKeying::DerivedSubkey)
//! ```
//!
//! How `mac_key` is obtained is a caller-visible choice, see [`MacKeying`].

pub mod aead;

pub use aead::{encrypt, verify, verify_and_decrypt, AuthError, MacKeying};

/// Size of the secret key in bytes (256-bit)
pub const KEY_SIZE: usize = 32;

/// Size of an XChaCha20 nonce (192-bit)
pub const NONCE_SIZE: usize = 24;

/// Size of a Poly1305 authentication tag
pub const TAG_SIZE: usize = 16;
