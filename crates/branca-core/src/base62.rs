//! Base62 rendering of envelope bytes
//!
//! Big-number base conversion over the `0-9A-Za-z` alphabet: tokens stay
//! URL-, cookie-, and header-safe without padding characters.

use crate::error::{TokenError, TokenResult};

const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

pub fn encode(data: &[u8]) -> String {
    base_x::encode(ALPHABET, data)
}

/// Decode token text back into envelope bytes.
///
/// Fails with [`TokenError::MalformedToken`] on any character outside the
/// alphabet.
pub fn decode(text: &str) -> TokenResult<Vec<u8>> {
    base_x::decode(ALPHABET, text)
        .map_err(|_| TokenError::MalformedToken("invalid base62 character".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_preserves_bytes() {
        let data = [0xBAu8, 0x00, 0x01, 0xFF, 0x7F, 0x80, 0x00];
        let text = encode(&data);
        assert_eq!(decode(&text).unwrap(), data);
    }

    #[test]
    fn test_output_is_alphanumeric() {
        let text = encode(&[0xBAu8; 64]);
        assert!(text.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_rejects_out_of_alphabet_input() {
        assert!(decode("abc$def").is_err());
        assert!(decode("with space").is_err());
        assert!(decode("emoji🙂").is_err());
    }
}
