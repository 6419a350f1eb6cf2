//! Secret key storage

use zeroize::Zeroize;

use crate::error::{TokenError, TokenResult};
use crate::KEY_SIZE;

/// The 256-bit secret key a codec is constructed with. Zeroized on drop.
///
/// The bytes are copied in at construction and never handed back out; the
/// `Debug` impl redacts them.
#[derive(Clone)]
pub struct SecretKey {
    bytes: [u8; KEY_SIZE],
}

impl SecretKey {
    /// Copy a key out of a caller-supplied slice.
    ///
    /// Fails with [`TokenError::InvalidKeyLength`] unless the slice is
    /// exactly 32 bytes.
    pub fn from_slice(key: &[u8]) -> TokenResult<Self> {
        if key.len() != KEY_SIZE {
            return Err(TokenError::InvalidKeyLength { actual: key.len() });
        }
        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(key);
        Ok(Self { bytes })
    }

    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_wrong_lengths() {
        for len in [0, 16, 31, 33, 64] {
            match SecretKey::from_slice(&vec![0u8; len]) {
                Err(TokenError::InvalidKeyLength { actual }) => assert_eq!(actual, len),
                other => panic!("expected InvalidKeyLength for {len}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_accepts_exact_length() {
        let key = SecretKey::from_slice(&[7u8; KEY_SIZE]).unwrap();
        assert_eq!(key.as_bytes(), &[7u8; KEY_SIZE]);
    }

    #[test]
    fn test_debug_redacts_bytes() {
        let key = SecretKey::from_bytes([0xAAu8; KEY_SIZE]);
        let rendered = format!("{key:?}");
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains("170")); // 0xAA
    }
}
