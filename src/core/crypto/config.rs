/*!
Cryptographic algorithm configuration.

Curve and AEAD algorithm are explicit inputs, validated at the boundary
against the catalog in [`crate::core::crypto::registry`].
*/

use std::fmt;
use std::str::FromStr;

use crate::core::constants::{HKDF_INFO_AES, HKDF_INFO_CHACHA};
use crate::core::crypto::cipher::Cipher;
use crate::core::crypto::curves::CurveId;
use crate::core::crypto::key_exchange::{SharedKey, SharedSecretDeriver};
use crate::core::crypto::keypair::KeyPair;
use crate::core::crypto::registry;
use crate::core::error::{Error, Result};

/// Supported Symmetric Encryption Algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymmetricAlgorithm {
    /// AES-256-GCM - hardware acceleration on many platforms
    Aes256Gcm,
    /// ChaCha20-Poly1305
    ChaCha20Poly1305,
}

impl Default for SymmetricAlgorithm {
    fn default() -> Self {
        if cfg!(feature = "aes-gcm") {
            SymmetricAlgorithm::Aes256Gcm
        } else {
            SymmetricAlgorithm::ChaCha20Poly1305
        }
    }
}

impl SymmetricAlgorithm {
    /// Every algorithm in the catalog
    pub const ALL: [SymmetricAlgorithm; 2] = [
        SymmetricAlgorithm::Aes256Gcm,
        SymmetricAlgorithm::ChaCha20Poly1305,
    ];

    /// Get the name of the algorithm as a string
    pub fn name(&self) -> &'static str {
        match self {
            SymmetricAlgorithm::Aes256Gcm => "aes-256-gcm",
            SymmetricAlgorithm::ChaCha20Poly1305 => "chacha20-poly1305",
        }
    }

    /// Check if the algorithm is available in the current build
    pub fn is_available(&self) -> bool {
        match self {
            SymmetricAlgorithm::Aes256Gcm => cfg!(feature = "aes-gcm"),
            SymmetricAlgorithm::ChaCha20Poly1305 => true,
        }
    }

    /// HKDF info string binding a derived key to this algorithm
    pub fn kdf_info(&self) -> &'static [u8] {
        match self {
            SymmetricAlgorithm::Aes256Gcm => HKDF_INFO_AES,
            SymmetricAlgorithm::ChaCha20Poly1305 => HKDF_INFO_CHACHA,
        }
    }

    /// Resolve an algorithm name or alias through the catalog
    pub fn from_name(name: &str) -> Result<Self> {
        registry::lookup_symmetric(name)
            .ok_or_else(|| Error::UnsupportedAlgorithm(name.to_string()))
    }

    /// Fail if the algorithm was compiled out
    pub fn ensure_available(&self) -> Result<()> {
        if self.is_available() {
            Ok(())
        } else {
            Err(Error::UnsupportedAlgorithm(format!(
                "{} is not available, enable the 'aes-gcm' feature",
                self.name()
            )))
        }
    }
}

impl fmt::Display for SymmetricAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SymmetricAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SymmetricAlgorithm::from_name(s)
    }
}

/// Cryptographic configuration for an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CryptoConfig {
    /// Curve used for keypairs and key agreement
    pub curve: CurveId,
    /// Symmetric encryption algorithm
    pub symmetric: SymmetricAlgorithm,
}

impl CryptoConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new configuration with specific settings
    pub fn with_algorithms(curve: CurveId, symmetric: SymmetricAlgorithm) -> Self {
        Self { curve, symmetric }
    }

    /// Build a configuration from catalog names, validating both
    pub fn from_names(curve: &str, symmetric: &str) -> Result<Self> {
        let config = Self {
            curve: CurveId::from_name(curve)?,
            symmetric: SymmetricAlgorithm::from_name(symmetric)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a configuration with the larger P-384 curve
    pub fn high_security() -> Self {
        Self {
            curve: CurveId::Secp384r1,
            symmetric: SymmetricAlgorithm::default(),
        }
    }

    /// Create a configuration that avoids AES for targets without AES-NI
    pub fn portable() -> Self {
        Self {
            curve: CurveId::Secp256r1,
            symmetric: SymmetricAlgorithm::ChaCha20Poly1305,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.symmetric.ensure_available()
    }

    /// Get the name of the curve as a string
    pub fn curve_name(&self) -> &'static str {
        self.curve.name()
    }

    /// Get the name of the symmetric algorithm as a string
    pub fn symmetric_name(&self) -> &'static str {
        self.symmetric.name()
    }

    /// Generate a keypair on the configured curve
    pub fn generate_keypair(&self) -> Result<KeyPair> {
        KeyPair::generate(self.curve)
    }

    /// Key deriver bound to the configured AEAD algorithm
    pub fn deriver(&self) -> SharedSecretDeriver {
        SharedSecretDeriver::for_algorithm(self.symmetric)
    }

    /// Cipher for the configured AEAD algorithm
    pub fn cipher(&self, key: &SharedKey) -> Result<Cipher> {
        Cipher::new(key, self.symmetric)
    }
}
