/*!
Symmetric encryption algorithm implementations.
*/

mod chacha20poly1305;
#[cfg(feature = "aes-gcm")]
mod aes_gcm;

use crate::core::constants::sizes;
use crate::core::crypto::config::SymmetricAlgorithm;
use crate::core::crypto::traits::cipher::SymmetricCipher;
#[cfg(not(feature = "aes-gcm"))]
use crate::core::error::Error;
use crate::core::error::Result;

/// Create a cipher for the specified algorithm
pub fn create_cipher(
    key: &[u8; sizes::KEY_SIZE],
    algorithm: SymmetricAlgorithm,
) -> Result<Box<dyn SymmetricCipher>> {
    match algorithm {
        SymmetricAlgorithm::ChaCha20Poly1305 => {
            Ok(Box::new(chacha20poly1305::ChaCha20Poly1305Cipher::new(key)))
        }
        SymmetricAlgorithm::Aes256Gcm => {
            #[cfg(feature = "aes-gcm")]
            {
                Ok(Box::new(aes_gcm::Aes256GcmCipher::new(key)))
            }
            #[cfg(not(feature = "aes-gcm"))]
            {
                Err(Error::UnsupportedAlgorithm(
                    "aes-256-gcm is not available, enable the 'aes-gcm' feature".into(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;

    #[test]
    fn test_every_available_backend() {
        let key = [0x42u8; sizes::KEY_SIZE];
        let nonce = [0x24u8; sizes::NONCE_SIZE];

        for algorithm in SymmetricAlgorithm::ALL {
            if !algorithm.is_available() {
                continue;
            }
            let cipher = create_cipher(&key, algorithm).unwrap();
            assert_eq!(cipher.algorithm(), algorithm);

            let sealed = cipher.encrypt(&nonce, b"payload").unwrap();
            assert_eq!(sealed.len(), b"payload".len() + sizes::TAG_SIZE);
            assert_eq!(cipher.decrypt(&nonce, &sealed).unwrap(), b"payload");

            let mut tampered = sealed.clone();
            tampered[0] ^= 0x01;
            assert!(matches!(
                cipher.decrypt(&nonce, &tampered),
                Err(Error::AuthenticationFailure)
            ));
        }
    }

    #[test]
    fn test_backends_disagree() {
        let key = [0x42u8; sizes::KEY_SIZE];
        let nonce = [0x24u8; sizes::NONCE_SIZE];
        if !SymmetricAlgorithm::Aes256Gcm.is_available() {
            return;
        }

        let aes = create_cipher(&key, SymmetricAlgorithm::Aes256Gcm).unwrap();
        let chacha = create_cipher(&key, SymmetricAlgorithm::ChaCha20Poly1305).unwrap();
        let sealed = aes.encrypt(&nonce, b"payload").unwrap();
        assert!(chacha.decrypt(&nonce, &sealed).is_err());
    }
}
