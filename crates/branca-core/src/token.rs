//! Token envelope codec
//!
//! Envelope layout (binary, before base62):
//!
//! ```text
//! offset 0   : version byte 0xBA
//! offset 1   : timestamp, big-endian u32 seconds
//! offset 5   : 24-byte nonce
//! offset 29  : N-byte ciphertext (N = plaintext length)
//! offset 29+N: 16-byte Poly1305 tag over bytes [0, 29)
//! ```

use branca_crypto::{self as crypto, MacKeying};
use tracing::trace;

use crate::base62;
use crate::error::{TokenError, TokenResult};
use crate::key::SecretKey;
use crate::nonce;
use crate::time::{SystemClock, TimeSource};
use crate::{HEADER_SIZE, MIN_ENVELOPE_SIZE, NONCE_SIZE, TAG_SIZE, VERSION};

/// Encodes and decodes tokens under a single 256-bit secret key.
///
/// Stateless apart from the key and configuration, which are read-only after
/// construction: `&self` methods are reentrant and a codec can be shared
/// across threads without coordination.
pub struct TokenCodec {
    key: SecretKey,
    keying: MacKeying,
    clock: Box<dyn TimeSource>,
}

/// Fixed-offset view into a decoded envelope.
struct Envelope<'a> {
    header: &'a [u8],
    nonce: [u8; NONCE_SIZE],
    ciphertext: &'a [u8],
    tag: [u8; TAG_SIZE],
}

impl TokenCodec {
    /// Build a codec from a caller-supplied key.
    ///
    /// The key must be exactly 32 bytes; it is copied into storage that is
    /// zeroized on drop. Defaults are the wire-compatible
    /// [`MacKeying::RawKey`] mode and the system clock.
    pub fn new(key: &[u8]) -> TokenResult<Self> {
        Ok(Self {
            key: SecretKey::from_slice(key)?,
            keying: MacKeying::default(),
            clock: Box::new(SystemClock),
        })
    }

    /// Select how the Poly1305 key is obtained. See [`MacKeying`] for the
    /// compatibility/security trade-off.
    pub fn with_mac_keying(mut self, keying: MacKeying) -> Self {
        self.keying = keying;
        self
    }

    /// Replace the clock used for envelope timestamps.
    pub fn with_time_source(mut self, clock: impl TimeSource + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Encrypt `plaintext` into a token, drawing a fresh random nonce.
    pub fn encode(&self, plaintext: &[u8]) -> TokenResult<String> {
        let nonce = nonce::generate()?;
        self.encode_with_nonce(plaintext, &nonce)
    }

    /// Encrypt `plaintext` into a token under a caller-chosen nonce.
    ///
    /// Deterministic for a fixed (key, nonce, plaintext, timestamp). Nonce
    /// uniqueness is the caller's contract; reusing one under the same key
    /// forfeits confidentiality.
    pub fn encode_with_nonce(
        &self,
        plaintext: &[u8],
        nonce: &[u8; NONCE_SIZE],
    ) -> TokenResult<String> {
        let timestamp = self.clock.unix_now();

        let mut header = [0u8; HEADER_SIZE];
        header[0] = VERSION;
        header[1..5].copy_from_slice(&timestamp.to_be_bytes());
        header[5..].copy_from_slice(nonce);

        let (ciphertext, tag) =
            crypto::encrypt(self.key.as_bytes(), nonce, plaintext, &header, self.keying);

        let mut envelope = Vec::with_capacity(HEADER_SIZE + ciphertext.len() + TAG_SIZE);
        envelope.extend_from_slice(&header);
        envelope.extend_from_slice(&ciphertext);
        envelope.extend_from_slice(&tag);

        trace!(plaintext_len = plaintext.len(), timestamp, "token encoded");
        Ok(base62::encode(&envelope))
    }

    /// Authenticate and decrypt a token, returning the payload.
    ///
    /// Validation order is fixed: base62 decode, version byte, minimum
    /// length, tag verification, and only then decryption. Any failure is
    /// terminal for the call; no partial plaintext is ever returned.
    pub fn decode(&self, token: &str) -> TokenResult<Vec<u8>> {
        let raw = base62::decode(token)?;
        let envelope = parse_envelope(&raw)?;

        let plaintext = crypto::verify_and_decrypt(
            self.key.as_bytes(),
            &envelope.nonce,
            envelope.ciphertext,
            &envelope.tag,
            envelope.header,
            self.keying,
        )
        .map_err(|_| TokenError::AuthenticationFailed)?;

        trace!(plaintext_len = plaintext.len(), "token decoded");
        Ok(plaintext)
    }

    /// Authenticate a token and return its embedded timestamp without
    /// decrypting the payload.
    ///
    /// Expiry policy stays with the caller; this only proves the timestamp
    /// is the one sealed under the key.
    pub fn timestamp(&self, token: &str) -> TokenResult<u32> {
        let raw = base62::decode(token)?;
        let envelope = parse_envelope(&raw)?;

        crypto::verify(
            self.key.as_bytes(),
            &envelope.nonce,
            &envelope.tag,
            envelope.header,
            self.keying,
        )
        .map_err(|_| TokenError::AuthenticationFailed)?;

        let mut ts = [0u8; 4];
        ts.copy_from_slice(&envelope.header[1..5]);
        Ok(u32::from_be_bytes(ts))
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("key", &self.key)
            .field("keying", &self.keying)
            .finish()
    }
}

/// Slice a raw envelope at its fixed offsets.
///
/// Checks run in order: version byte first, then minimum length, so a
/// foreign-format blob reports [`TokenError::UnsupportedVersion`] before
/// anything else and no slice can go out of bounds.
fn parse_envelope(raw: &[u8]) -> TokenResult<Envelope<'_>> {
    let version = *raw
        .first()
        .ok_or_else(|| TokenError::MalformedToken("empty envelope".into()))?;
    if version != VERSION {
        return Err(TokenError::UnsupportedVersion { actual: version });
    }
    if raw.len() < MIN_ENVELOPE_SIZE {
        return Err(TokenError::MalformedToken(format!(
            "envelope is {} bytes, minimum is {MIN_ENVELOPE_SIZE}",
            raw.len()
        )));
    }

    let header = &raw[..HEADER_SIZE];
    let mut nonce = [0u8; NONCE_SIZE];
    nonce.copy_from_slice(&header[5..]);

    let (body, tag_bytes) = raw.split_at(raw.len() - TAG_SIZE);
    let mut tag = [0u8; TAG_SIZE];
    tag.copy_from_slice(tag_bytes);

    Ok(Envelope {
        header,
        nonce,
        ciphertext: &body[HEADER_SIZE..],
        tag,
    })
}
