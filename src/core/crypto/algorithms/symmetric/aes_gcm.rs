/*!
AES-256-GCM symmetric encryption implementation.
*/

use aes_gcm::{
    Aes256Gcm, Key as AesKey, Nonce,
    aead::{Aead, KeyInit},
};

use crate::core::constants::sizes;
use crate::core::crypto::config::SymmetricAlgorithm;
use crate::core::crypto::traits::cipher::SymmetricCipher;
use crate::core::error::{Error, Result};

/// AES-256-GCM cipher implementation
pub struct Aes256GcmCipher {
    cipher: Aes256Gcm,
}

impl Aes256GcmCipher {
    /// Create a new AES-256-GCM cipher
    pub fn new(key: &[u8; sizes::KEY_SIZE]) -> Self {
        Self {
            cipher: Aes256Gcm::new(AesKey::<Aes256Gcm>::from_slice(key)),
        }
    }
}

impl SymmetricCipher for Aes256GcmCipher {
    fn encrypt(&self, nonce: &[u8; sizes::NONCE_SIZE], data: &[u8]) -> Result<Vec<u8>> {
        self.cipher
            .encrypt(Nonce::from_slice(nonce), data)
            .map_err(|_e| Error::InvalidInput("plaintext too long for AES-256-GCM".into()))
    }

    fn decrypt(&self, nonce: &[u8; sizes::NONCE_SIZE], data: &[u8]) -> Result<Vec<u8>> {
        self.cipher
            .decrypt(Nonce::from_slice(nonce), data)
            .map_err(|_e| Error::AuthenticationFailure)
    }

    fn algorithm(&self) -> SymmetricAlgorithm {
        SymmetricAlgorithm::Aes256Gcm
    }
}
