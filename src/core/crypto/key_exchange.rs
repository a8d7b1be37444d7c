/*!
ECDH key agreement.

The local scalar is multiplied with the peer's point and the shared
x-coordinate is passed through HKDF-SHA256. The raw coordinate never leaves
this module.
*/

use std::fmt;

use elliptic_curve::ecdh::{SharedSecret, diffie_hellman};
use elliptic_curve::{CurveArithmetic, SecretKey};
use hkdf::Hkdf;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::constants::{HKDF_SALT, sizes};
use crate::core::crypto::config::SymmetricAlgorithm;
use crate::core::crypto::keypair::{PrivateKey, PublicKey, PublicPoint, SecretScalar};
use crate::core::error::{Error, KeyAgreementError, Result};

/// Fixed-length symmetric key derived from an ECDH computation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedKey {
    bytes: [u8; sizes::KEY_SIZE],
}

impl SharedKey {
    /// Wrap existing key material.
    ///
    /// Keys for live traffic come from [`SharedSecretDeriver::derive`]; this is
    /// for test vectors and keys restored by the caller.
    pub fn from_bytes(bytes: [u8; sizes::KEY_SIZE]) -> Self {
        Self { bytes }
    }

    pub(crate) fn as_bytes(&self) -> &[u8; sizes::KEY_SIZE] {
        &self.bytes
    }
}

impl PartialEq for SharedKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes[..].ct_eq(&other.bytes[..]).into()
    }
}

impl Eq for SharedKey {}

impl fmt::Debug for SharedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedKey([REDACTED])")
    }
}

/// Derives [`SharedKey`]s from a local private key and a peer public key
#[derive(Debug, Clone)]
pub struct SharedSecretDeriver {
    info: Vec<u8>,
}

impl Default for SharedSecretDeriver {
    fn default() -> Self {
        Self::for_algorithm(SymmetricAlgorithm::default())
    }
}

impl SharedSecretDeriver {
    /// Create a deriver bound to the default AEAD algorithm
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deriver whose keys are bound to one AEAD algorithm
    pub fn for_algorithm(algorithm: SymmetricAlgorithm) -> Self {
        Self {
            info: algorithm.kdf_info().to_vec(),
        }
    }

    /// Create a deriver with a caller-chosen HKDF info string
    pub fn with_info(info: impl Into<Vec<u8>>) -> Self {
        Self { info: info.into() }
    }

    /// Derive the shared key for `private` and the peer's `peer` public key.
    ///
    /// Both keys must be on the same curve. Two honest parties obtain
    /// identical keys when they use the same deriver settings.
    pub fn derive(&self, private: &PrivateKey, peer: &PublicKey) -> Result<SharedKey> {
        let key = match (&private.scalar, &peer.point) {
            (SecretScalar::P256(sk), PublicPoint::P256(pk)) => self.expand(&agree(sk, pk)),
            (SecretScalar::P384(sk), PublicPoint::P384(pk)) => self.expand(&agree(sk, pk)),
            (SecretScalar::K256(sk), PublicPoint::K256(pk)) => self.expand(&agree(sk, pk)),
            _ => {
                return Err(Error::CurveMismatch {
                    local: private.curve(),
                    peer: peer.curve(),
                });
            }
        }?;

        log::debug!("Derived shared key on {}", private.curve());
        Ok(key)
    }

    /// Run HKDF-SHA256 over the shared x-coordinate
    fn expand<C: CurveArithmetic>(&self, shared: &SharedSecret<C>) -> Result<SharedKey> {
        let hk = Hkdf::<Sha256>::new(Some(HKDF_SALT), shared.raw_secret_bytes().as_slice());
        let mut okm = [0u8; sizes::KEY_SIZE];
        hk.expand(&self.info, &mut okm)
            .map_err(|_| KeyAgreementError::KeyDerivationFailed)?;

        let key = SharedKey::from_bytes(okm);
        okm.zeroize();
        Ok(key)
    }
}

/// Scalar multiplication of the peer point by the local scalar
fn agree<C: CurveArithmetic>(
    secret: &SecretKey<C>,
    peer: &elliptic_curve::PublicKey<C>,
) -> SharedSecret<C> {
    diffie_hellman(secret.to_nonzero_scalar(), peer.as_affine())
}

/// Derive a shared key with the default deriver
pub fn derive(private: &PrivateKey, peer: &PublicKey) -> Result<SharedKey> {
    SharedSecretDeriver::default().derive(private, peer)
}
