/*!
Traits for symmetric encryption and decryption.

This module defines the interface every AEAD backend implements.
*/

use crate::core::constants::sizes::NONCE_SIZE;
use crate::core::crypto::config::SymmetricAlgorithm;
use crate::core::error::Result;

/// Trait for AEAD cipher operations
pub trait SymmetricCipher: Send + Sync {
    /// Encrypt data, returning the ciphertext with the tag appended
    fn encrypt(&self, nonce: &[u8; NONCE_SIZE], data: &[u8]) -> Result<Vec<u8>>;

    /// Verify the trailing tag and decrypt.
    ///
    /// Fails with `AuthenticationFailure` without returning any plaintext.
    fn decrypt(&self, nonce: &[u8; NONCE_SIZE], data: &[u8]) -> Result<Vec<u8>>;

    /// Get the algorithm being used
    fn algorithm(&self) -> SymmetricAlgorithm;
}
