/*!
Serialization support for the ECC/AEAD pipeline.

This module provides serializable mirrors of the configuration, public keys
and ciphertext bundles. Everything is carried as catalog names and hex
strings. It's only built when the `serde-support` feature is enabled.

Private keys and shared keys have no serializable form.
*/

use serde::{Deserialize, Serialize};

use crate::core::{
    crypto::{Ciphertext, CryptoConfig, CurveId, PublicKey, SymmetricAlgorithm},
    error::{Error, Result},
};

/// Serializable version of CryptoConfig
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerdeCryptoConfig {
    /// Curve catalog name
    pub curve: String,
    /// AEAD catalog name
    pub symmetric: String,
}

impl From<CryptoConfig> for SerdeCryptoConfig {
    fn from(config: CryptoConfig) -> Self {
        Self {
            curve: config.curve_name().to_string(),
            symmetric: config.symmetric_name().to_string(),
        }
    }
}

impl TryFrom<SerdeCryptoConfig> for CryptoConfig {
    type Error = Error;

    fn try_from(config: SerdeCryptoConfig) -> Result<Self> {
        CryptoConfig::from_names(&config.curve, &config.symmetric)
    }
}

/// Serializable version of PublicKey
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerdePublicKey {
    /// Curve catalog name
    pub curve: String,
    /// Uncompressed SEC1 point as hex
    pub point: String,
}

impl From<&PublicKey> for SerdePublicKey {
    fn from(key: &PublicKey) -> Self {
        Self {
            curve: key.curve().name().to_string(),
            point: key.to_hex(),
        }
    }
}

impl TryFrom<SerdePublicKey> for PublicKey {
    type Error = Error;

    fn try_from(key: SerdePublicKey) -> Result<Self> {
        let curve = CurveId::from_name(&key.curve)?;
        PublicKey::from_hex(curve, &key.point)
    }
}

/// Serializable envelope around a ciphertext bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerdeCiphertext {
    /// AEAD catalog name the bundle was sealed with
    pub algorithm: String,
    /// Hex wire form `nonce || data || tag`
    pub payload: String,
}

impl SerdeCiphertext {
    /// Wrap a bundle together with its algorithm
    pub fn new(algorithm: SymmetricAlgorithm, ciphertext: &Ciphertext) -> Self {
        Self {
            algorithm: algorithm.name().to_string(),
            payload: ciphertext.to_hex(),
        }
    }

    /// Parse the algorithm and bundle back out
    pub fn open(&self) -> Result<(SymmetricAlgorithm, Ciphertext)> {
        let algorithm = SymmetricAlgorithm::from_name(&self.algorithm)?;
        Ok((algorithm, Ciphertext::from_hex(&self.payload)?))
    }
}
