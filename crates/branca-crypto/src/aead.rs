//! XChaCha20 encryption with a Poly1305 tag over the associated data

use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::XChaCha20;
use poly1305::universal_hash::KeyInit;
use poly1305::Poly1305;
use subtle::ConstantTimeEq;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};

/// Tag verification failed: tampered data, wrong key, or wrong keying mode.
///
/// Carries no detail about where the comparison diverged.
#[derive(Debug, Error)]
#[error("Poly1305 tag verification failed")]
pub struct AuthError;

/// How the Poly1305 key is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MacKeying {
    /// Poly1305 keyed directly with the 32-byte secret key; the keystream is
    /// applied to the payload from block 0. Wire-compatible with deployed
    /// tokens.
    ///
    /// Poly1305 is a one-time authenticator: keeping its key fixed across
    /// many messages erodes the forgery bound the primitive is designed
    /// around. Prefer [`MacKeying::DerivedSubkey`] unless compatibility with
    /// existing tokens is required.
    #[default]
    RawKey,

    /// Poly1305 keyed with the first 32 bytes of the XChaCha20 keystream;
    /// the payload is encrypted starting at the next keystream block. This
    /// is the standard construction for the ChaCha/Poly1305 pairing: every
    /// (key, nonce) pair yields a fresh one-time MAC key.
    DerivedSubkey,
}

/// Encrypt `plaintext` and authenticate `aad`.
///
/// Returns `(ciphertext, tag)`. The ciphertext is exactly as long as the
/// plaintext; the 16-byte tag covers `aad` only.
pub fn encrypt(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    plaintext: &[u8],
    aad: &[u8],
    keying: MacKeying,
) -> (Vec<u8>, [u8; TAG_SIZE]) {
    let mut cipher = XChaCha20::new(key.into(), nonce.into());
    let mac_key = mac_key_for(key, &mut cipher, keying);

    let mut ciphertext = plaintext.to_vec();
    cipher.apply_keystream(&mut ciphertext);

    let tag = compute_tag(&mac_key, aad);
    (ciphertext, tag)
}

/// Recompute the tag over `aad` and compare it against `tag`.
///
/// The comparison is constant-time; its running time does not depend on
/// where the first mismatching byte sits.
pub fn verify(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    tag: &[u8; TAG_SIZE],
    aad: &[u8],
    keying: MacKeying,
) -> Result<(), AuthError> {
    let mut cipher = XChaCha20::new(key.into(), nonce.into());
    let mac_key = mac_key_for(key, &mut cipher, keying);

    let expected = compute_tag(&mac_key, aad);
    if bool::from(expected.ct_eq(tag)) {
        Ok(())
    } else {
        Err(AuthError)
    }
}

/// Verify the tag over `aad`, then decrypt `ciphertext`.
///
/// Verification happens before any keystream touches the ciphertext; on
/// mismatch no plaintext is produced.
pub fn verify_and_decrypt(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ciphertext: &[u8],
    tag: &[u8; TAG_SIZE],
    aad: &[u8],
    keying: MacKeying,
) -> Result<Vec<u8>, AuthError> {
    let mut cipher = XChaCha20::new(key.into(), nonce.into());
    let mac_key = mac_key_for(key, &mut cipher, keying);

    let expected = compute_tag(&mac_key, aad);
    if !bool::from(expected.ct_eq(tag)) {
        return Err(AuthError);
    }

    let mut plaintext = ciphertext.to_vec();
    cipher.apply_keystream(&mut plaintext);
    Ok(plaintext)
}

/// Resolve the Poly1305 key and leave the cipher positioned for the payload.
fn mac_key_for(
    key: &[u8; KEY_SIZE],
    cipher: &mut XChaCha20,
    keying: MacKeying,
) -> Zeroizing<[u8; KEY_SIZE]> {
    match keying {
        MacKeying::RawKey => Zeroizing::new(*key),
        MacKeying::DerivedSubkey => {
            // Consuming the full first block advances the cipher to block 1,
            // where payload encryption starts.
            let mut block = Zeroizing::new([0u8; 64]);
            cipher.apply_keystream(&mut block[..]);
            let mut subkey = Zeroizing::new([0u8; KEY_SIZE]);
            subkey.copy_from_slice(&block[..KEY_SIZE]);
            subkey
        }
    }
}

fn compute_tag(mac_key: &[u8; KEY_SIZE], aad: &[u8]) -> [u8; TAG_SIZE] {
    let mac = Poly1305::new(mac_key.into());
    mac.compute_unpadded(aad).into()
}
