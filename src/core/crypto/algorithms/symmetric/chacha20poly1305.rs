/*!
ChaCha20-Poly1305 symmetric encryption implementation.
*/

use chacha20poly1305::{
    ChaCha20Poly1305, Key as ChaChaKey, Nonce,
    aead::{Aead, KeyInit},
};

use crate::core::constants::sizes;
use crate::core::crypto::config::SymmetricAlgorithm;
use crate::core::crypto::traits::cipher::SymmetricCipher;
use crate::core::error::{Error, Result};

/// ChaCha20-Poly1305 cipher implementation
pub struct ChaCha20Poly1305Cipher {
    cipher: ChaCha20Poly1305,
}

impl ChaCha20Poly1305Cipher {
    /// Create a new ChaCha20-Poly1305 cipher
    pub fn new(key: &[u8; sizes::KEY_SIZE]) -> Self {
        Self {
            cipher: ChaCha20Poly1305::new(ChaChaKey::from_slice(key)),
        }
    }
}

impl SymmetricCipher for ChaCha20Poly1305Cipher {
    fn encrypt(&self, nonce: &[u8; sizes::NONCE_SIZE], data: &[u8]) -> Result<Vec<u8>> {
        self.cipher
            .encrypt(Nonce::from_slice(nonce), data)
            .map_err(|_e| Error::InvalidInput("plaintext too long for ChaCha20-Poly1305".into()))
    }

    fn decrypt(&self, nonce: &[u8; sizes::NONCE_SIZE], data: &[u8]) -> Result<Vec<u8>> {
        self.cipher
            .decrypt(Nonce::from_slice(nonce), data)
            .map_err(|_e| Error::AuthenticationFailure)
    }

    fn algorithm(&self) -> SymmetricAlgorithm {
        SymmetricAlgorithm::ChaCha20Poly1305
    }
}
