/*!
Authenticated encryption for the ECC/AEAD pipeline.

A [`Cipher`] owns one [`SharedKey`] and guarantees that no nonce is used
twice under it. Generated nonces are a per-cipher random prefix plus an
atomic counter; caller-supplied nonces are remembered and checked.

The wire form of a [`Ciphertext`] is `nonce (12) || data || tag (16)`,
hex-encoded.
*/

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, PoisonError};

use rand::RngCore;

use crate::core::constants::sizes;
use crate::core::crypto::algorithms::create_cipher;
use crate::core::crypto::config::SymmetricAlgorithm;
use crate::core::crypto::key_exchange::SharedKey;
use crate::core::crypto::traits::cipher::SymmetricCipher;
use crate::core::encoding;
use crate::core::error::{Error, Result};

/// A 96-bit AEAD nonce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nonce([u8; sizes::NONCE_SIZE]);

impl Nonce {
    /// Draw a nonce from the CSPRNG
    pub fn random() -> Self {
        let mut bytes = [0u8; sizes::NONCE_SIZE];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Wrap raw nonce bytes
    pub fn from_bytes(bytes: [u8; sizes::NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Raw nonce bytes
    pub fn as_bytes(&self) -> &[u8; sizes::NONCE_SIZE] {
        &self.0
    }
}

impl From<[u8; sizes::NONCE_SIZE]> for Nonce {
    fn from(bytes: [u8; sizes::NONCE_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Nonce {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        <[u8; sizes::NONCE_SIZE]>::try_from(bytes)
            .map(Self)
            .map_err(|_| {
                Error::InvalidInput(format!(
                    "nonce must be {} bytes, got {}",
                    sizes::NONCE_SIZE,
                    bytes.len()
                ))
            })
    }
}

/// Encrypted payload: the nonce travels with the data and tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    nonce: Nonce,
    data: Vec<u8>,
    tag: [u8; sizes::TAG_SIZE],
}

impl Ciphertext {
    /// Split AEAD output (`data || tag`) into a bundle
    fn from_sealed(nonce: Nonce, mut sealed: Vec<u8>) -> Result<Self> {
        if sealed.len() < sizes::TAG_SIZE {
            return crate::invalid_input_err!("AEAD output shorter than its tag");
        }
        let tag_bytes = sealed.split_off(sealed.len() - sizes::TAG_SIZE);
        let mut tag = [0u8; sizes::TAG_SIZE];
        tag.copy_from_slice(&tag_bytes);

        Ok(Self { nonce, data: sealed, tag })
    }

    /// Nonce used for this encryption
    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    /// Encrypted payload without nonce or tag
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Authentication tag
    pub fn tag(&self) -> &[u8; sizes::TAG_SIZE] {
        &self.tag
    }

    /// Serialize as `nonce || data || tag`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(sizes::MIN_BUNDLE_SIZE + self.data.len());
        out.extend_from_slice(self.nonce.as_bytes());
        out.extend_from_slice(&self.data);
        out.extend_from_slice(&self.tag);
        out
    }

    /// Parse `nonce || data || tag`, splitting by length from both ends
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < sizes::MIN_BUNDLE_SIZE {
            return crate::invalid_input_err!(
                "ciphertext bundle truncated: {} bytes, need at least {}",
                bytes.len(),
                sizes::MIN_BUNDLE_SIZE
            );
        }

        let (nonce, rest) = bytes.split_at(sizes::NONCE_SIZE);
        let (data, tag) = rest.split_at(rest.len() - sizes::TAG_SIZE);
        let mut tag_bytes = [0u8; sizes::TAG_SIZE];
        tag_bytes.copy_from_slice(tag);

        Ok(Self {
            nonce: Nonce::try_from(nonce)?,
            data: data.to_vec(),
            tag: tag_bytes,
        })
    }

    /// Hex wire form
    pub fn to_hex(&self) -> String {
        encoding::to_hex(self.to_bytes())
    }

    /// Parse the hex wire form
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        Self::from_bytes(&encoding::from_hex(hex_str)?)
    }

    /// AEAD input for decryption (`data || tag`)
    fn sealed(&self) -> Vec<u8> {
        let mut sealed = Vec::with_capacity(self.data.len() + sizes::TAG_SIZE);
        sealed.extend_from_slice(&self.data);
        sealed.extend_from_slice(&self.tag);
        sealed
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Cipher handles authenticated encryption and decryption under one key
pub struct Cipher {
    /// AEAD backend keyed with the shared key
    inner: Box<dyn SymmetricCipher>,
    /// Random prefix for generated nonces (set once per cipher)
    nonce_prefix: [u8; sizes::NONCE_PREFIX_SIZE],
    /// Monotonic counter for generated nonces
    nonce_counter: AtomicU32,
    /// Nonces supplied by callers, never accepted twice
    caller_nonces: Mutex<HashSet<Nonce>>,
}

impl Cipher {
    /// Create a cipher for `key` using `algorithm`
    pub fn new(key: &SharedKey, algorithm: SymmetricAlgorithm) -> Result<Self> {
        let inner = create_cipher(key.as_bytes(), algorithm)?;

        let mut nonce_prefix = [0u8; sizes::NONCE_PREFIX_SIZE];
        rand::rng().fill_bytes(&mut nonce_prefix);

        log::trace!("Created {} cipher", algorithm);
        Ok(Self {
            inner,
            nonce_prefix,
            nonce_counter: AtomicU32::new(0),
            caller_nonces: Mutex::new(HashSet::new()),
        })
    }

    /// Create a cipher with the default algorithm
    pub fn with_default_algorithm(key: &SharedKey) -> Result<Self> {
        Self::new(key, SymmetricAlgorithm::default())
    }

    /// Algorithm in use
    pub fn algorithm(&self) -> SymmetricAlgorithm {
        self.inner.algorithm()
    }

    /// Encrypt under a freshly generated nonce
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Ciphertext> {
        let nonce = self.next_nonce()?;
        self.seal(nonce, plaintext)
    }

    /// Encrypt under a caller-supplied nonce.
    ///
    /// Fails with [`Error::NonceReuse`] if this cipher has already used the
    /// nonce, or if it collides with the range reserved for generated nonces.
    pub fn encrypt_with_nonce(&self, nonce: Nonce, plaintext: &[u8]) -> Result<Ciphertext> {
        self.claim_nonce(nonce)?;
        self.seal(nonce, plaintext)
    }

    /// Verify and decrypt a bundle.
    ///
    /// No plaintext is returned unless the tag verifies.
    pub fn decrypt(&self, ciphertext: &Ciphertext) -> Result<Vec<u8>> {
        self.inner
            .decrypt(ciphertext.nonce.as_bytes(), &ciphertext.sealed())
            .map_err(|_| {
                log::debug!("Rejected {} ciphertext", self.algorithm());
                Error::AuthenticationFailure
            })
    }

    /// Encrypt UTF-8 text into the hex wire form
    pub fn encrypt_string(&self, plaintext: &str) -> Result<String> {
        Ok(self.encrypt(plaintext.as_bytes())?.to_hex())
    }

    /// Decrypt the hex wire form back into UTF-8 text
    pub fn decrypt_string(&self, hex_str: &str) -> Result<String> {
        let ciphertext = Ciphertext::from_hex(hex_str)?;
        let plaintext = self.decrypt(&ciphertext)?;
        String::from_utf8(plaintext)
            .map_err(|e| Error::Encoding(format!("plaintext is not UTF-8: {}", e.utf8_error())))
    }

    fn seal(&self, nonce: Nonce, plaintext: &[u8]) -> Result<Ciphertext> {
        let sealed = self.inner.encrypt(nonce.as_bytes(), plaintext)?;
        Ciphertext::from_sealed(nonce, sealed)
    }

    /// Generate the next unique nonce.
    ///
    /// Layout: [4-byte counter (big-endian)] [8-byte random prefix]
    ///
    /// Returns `NonceExhausted` once the counter reaches `u32::MAX`.
    fn next_nonce(&self) -> Result<Nonce> {
        loop {
            let current = self.nonce_counter.load(Ordering::Relaxed);
            if current == u32::MAX {
                return Err(Error::NonceExhausted);
            }
            if let Ok(prev) = self.nonce_counter.compare_exchange_weak(
                current,
                current + 1,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                let mut nonce = [0u8; sizes::NONCE_SIZE];
                nonce[..sizes::NONCE_COUNTER_SIZE].copy_from_slice(&prev.to_be_bytes());
                nonce[sizes::NONCE_COUNTER_SIZE..].copy_from_slice(&self.nonce_prefix);
                return Ok(Nonce(nonce));
            }
        }
    }

    /// Record a caller nonce, rejecting repeats and the generated range
    fn claim_nonce(&self, nonce: Nonce) -> Result<()> {
        if nonce.0[sizes::NONCE_COUNTER_SIZE..] == self.nonce_prefix {
            log::debug!("Rejected caller nonce inside the generated range");
            return Err(Error::NonceReuse);
        }

        let mut used = self
            .caller_nonces
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !used.insert(nonce) {
            log::debug!("Rejected repeated caller nonce");
            return Err(Error::NonceReuse);
        }
        Ok(())
    }

    /// Get the current nonce counter value (for testing).
    #[cfg(test)]
    fn nonce_counter(&self) -> u32 {
        self.nonce_counter.load(Ordering::Relaxed)
    }
}

impl fmt::Debug for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cipher")
            .field("algorithm", &self.algorithm())
            .field("key", &"[REDACTED]")
            .finish()
    }
}
