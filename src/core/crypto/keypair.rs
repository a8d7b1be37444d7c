/*!
Elliptic-curve keypair generation.

Private scalars are drawn from the thread-local CSPRNG by rejection sampling
and zeroized when dropped. Public keys are always valid, non-identity points;
invalid encodings are rejected when a peer key is imported.
*/

use std::fmt;

use elliptic_curve::sec1::ToEncodedPoint;
use elliptic_curve::{CurveArithmetic, FieldBytes, SecretKey};
use rand::RngCore;
use zeroize::Zeroize;

use crate::core::constants::MAX_SCALAR_SAMPLING_ATTEMPTS;
use crate::core::crypto::curves::CurveId;
use crate::core::encoding;
use crate::core::error::{Error, KeyAgreementError, Result};

/// Curve point held by a [`PublicKey`]
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum PublicPoint {
    P256(p256::PublicKey),
    P384(p384::PublicKey),
    K256(k256::PublicKey),
}

/// Scalar held by a [`PrivateKey`]
#[derive(Clone)]
pub(crate) enum SecretScalar {
    P256(p256::SecretKey),
    P384(p384::SecretKey),
    K256(k256::SecretKey),
}

/// A public key: a validated curve point tagged with its curve
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) point: PublicPoint,
}

/// A private key: a non-zero scalar tagged with its curve.
///
/// There is no export. The scalar is wiped when the key is dropped.
#[derive(Clone)]
pub struct PrivateKey {
    pub(crate) scalar: SecretScalar,
}

/// A public/private keypair on one curve
#[derive(Clone)]
pub struct KeyPair {
    public: PublicKey,
    private: PrivateKey,
}

/// Draw a uniformly random non-zero scalar below the group order
fn random_secret<C: CurveArithmetic>() -> Result<SecretKey<C>> {
    let mut rng = rand::rng();
    let mut bytes = FieldBytes::<C>::default();

    for _ in 0..MAX_SCALAR_SAMPLING_ATTEMPTS {
        rng.fill_bytes(bytes.as_mut_slice());
        if let Ok(secret) = SecretKey::<C>::from_bytes(&bytes) {
            bytes.as_mut_slice().zeroize();
            return Ok(secret);
        }
    }

    bytes.as_mut_slice().zeroize();
    Err(Error::KeyGeneration)
}

impl PublicKey {
    /// Curve this key lives on
    pub fn curve(&self) -> CurveId {
        match self.point {
            PublicPoint::P256(_) => CurveId::Secp256r1,
            PublicPoint::P384(_) => CurveId::Secp384r1,
            PublicPoint::K256(_) => CurveId::Secp256k1,
        }
    }

    /// Import a SEC1-encoded point (compressed or uncompressed) for a named curve.
    ///
    /// Fails with [`KeyAgreementError::InvalidPublicKey`] when the bytes do not
    /// decode to a point on the curve, including the identity encoding.
    pub fn from_sec1_bytes(curve: CurveId, bytes: &[u8]) -> Result<Self> {
        let point = match curve {
            CurveId::Secp256r1 => p256::PublicKey::from_sec1_bytes(bytes).map(PublicPoint::P256),
            CurveId::Secp384r1 => p384::PublicKey::from_sec1_bytes(bytes).map(PublicPoint::P384),
            CurveId::Secp256k1 => k256::PublicKey::from_sec1_bytes(bytes).map(PublicPoint::K256),
        }
        .map_err(|_| {
            log::debug!("Rejected {} byte public key for {}", bytes.len(), curve);
            Error::KeyAgreement(KeyAgreementError::InvalidPublicKey)
        })?;

        Ok(Self { point })
    }

    /// Export the point in SEC1 form
    pub fn to_sec1_bytes(&self, compressed: bool) -> Vec<u8> {
        match &self.point {
            PublicPoint::P256(pk) => pk.to_encoded_point(compressed).as_bytes().to_vec(),
            PublicPoint::P384(pk) => pk.to_encoded_point(compressed).as_bytes().to_vec(),
            PublicPoint::K256(pk) => pk.to_encoded_point(compressed).as_bytes().to_vec(),
        }
    }

    /// Uncompressed SEC1 encoding as lowercase hex
    pub fn to_hex(&self) -> String {
        encoding::to_hex(self.to_sec1_bytes(false))
    }

    /// Import a hex-encoded SEC1 point for a named curve
    pub fn from_hex(curve: CurveId, hex_str: &str) -> Result<Self> {
        let bytes = encoding::from_hex(hex_str)?;
        Self::from_sec1_bytes(curve, &bytes)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("curve", &self.curve().name())
            .field("point", &self.to_hex())
            .finish()
    }
}

impl PrivateKey {
    /// Curve this key lives on
    pub fn curve(&self) -> CurveId {
        match self.scalar {
            SecretScalar::P256(_) => CurveId::Secp256r1,
            SecretScalar::P384(_) => CurveId::Secp384r1,
            SecretScalar::K256(_) => CurveId::Secp256k1,
        }
    }

    /// Generate a fresh private key on a curve
    pub fn generate(curve: CurveId) -> Result<Self> {
        let scalar = match curve {
            CurveId::Secp256r1 => SecretScalar::P256(random_secret::<p256::NistP256>()?),
            CurveId::Secp384r1 => SecretScalar::P384(random_secret::<p384::NistP384>()?),
            CurveId::Secp256k1 => SecretScalar::K256(random_secret::<k256::Secp256k1>()?),
        };
        Ok(Self { scalar })
    }

    /// Public key matching this private key
    pub fn public_key(&self) -> PublicKey {
        let point = match &self.scalar {
            SecretScalar::P256(sk) => PublicPoint::P256(sk.public_key()),
            SecretScalar::P384(sk) => PublicPoint::P384(sk.public_key()),
            SecretScalar::K256(sk) => PublicPoint::K256(sk.public_key()),
        };
        PublicKey { point }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &self.curve().name())
            .field("scalar", &"[REDACTED]")
            .finish()
    }
}

impl KeyPair {
    /// Generate a keypair on a catalog curve
    pub fn generate(curve: CurveId) -> Result<Self> {
        let private = PrivateKey::generate(curve)?;
        let public = private.public_key();
        log::debug!("Generated {} keypair", curve);
        Ok(Self { public, private })
    }

    /// Generate a keypair from a curve name such as `"secp256r1"`
    pub fn generate_named(curve_name: &str) -> Result<Self> {
        Self::generate(CurveId::from_name(curve_name)?)
    }

    /// Curve of both halves of the pair
    pub fn curve(&self) -> CurveId {
        self.public.curve()
    }

    /// The shareable half
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// The secret half
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("curve", &self.curve().name())
            .field("public", &self.public)
            .field("private", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_every_curve() {
        for curve in CurveId::ALL {
            let keypair = KeyPair::generate(curve).unwrap();
            assert_eq!(keypair.curve(), curve);
            assert_eq!(keypair.private_key().curve(), curve);
            assert_eq!(keypair.public_key(), &keypair.private_key().public_key());
        }
    }

    #[test]
    fn test_generate_named() {
        let keypair = KeyPair::generate_named("prime256v1").unwrap();
        assert_eq!(keypair.curve(), CurveId::Secp256r1);

        let result = KeyPair::generate_named("sect113r2");
        assert!(matches!(result, Err(Error::UnsupportedCurve(_))));
    }

    #[test]
    fn test_keypairs_are_distinct() {
        let a = KeyPair::generate(CurveId::Secp256r1).unwrap();
        let b = KeyPair::generate(CurveId::Secp256r1).unwrap();
        assert_ne!(a.public_key(), b.public_key());
    }

    #[test]
    fn test_sec1_encoding() {
        for curve in CurveId::ALL {
            let keypair = KeyPair::generate(curve).unwrap();
            let public = keypair.public_key();

            let uncompressed = public.to_sec1_bytes(false);
            assert_eq!(uncompressed.len(), curve.public_key_size(false));
            assert_eq!(uncompressed[0], 0x04);

            let compressed = public.to_sec1_bytes(true);
            assert_eq!(compressed.len(), curve.public_key_size(true));

            assert_eq!(&PublicKey::from_sec1_bytes(curve, &compressed).unwrap(), public);
            assert_eq!(&PublicKey::from_hex(curve, &public.to_hex()).unwrap(), public);
        }
    }

    #[test]
    fn test_reject_invalid_points() {
        let identity = [0x00u8];
        let result = PublicKey::from_sec1_bytes(CurveId::Secp256r1, &identity);
        assert!(matches!(
            result,
            Err(Error::KeyAgreement(KeyAgreementError::InvalidPublicKey))
        ));

        // x = 0, y = 0 is not on the curve
        let mut off_curve = vec![0x04u8];
        off_curve.extend_from_slice(&[0u8; 64]);
        assert!(PublicKey::from_sec1_bytes(CurveId::Secp256r1, &off_curve).is_err());

        // A P-384 encoding is not a P-256 point
        let p384 = KeyPair::generate(CurveId::Secp384r1).unwrap();
        let bytes = p384.public_key().to_sec1_bytes(false);
        assert!(PublicKey::from_sec1_bytes(CurveId::Secp256r1, &bytes).is_err());
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let keypair = KeyPair::generate(CurveId::Secp256k1).unwrap();
        let debug = format!("{:?}", keypair);
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("secp256k1"));
        assert!(!debug.contains("Secp256k1"));

        let private = format!("{:?}", keypair.private_key());
        assert!(private.contains("secp256k1"));
        assert!(private.contains("[REDACTED]"));
        assert!(format!("{:?}", keypair.public_key()).contains("secp256k1"));
    }
}
