/*!
Name catalog for curves and AEAD algorithms.

Lookup is case-insensitive and ignores surrounding whitespace. The catalog is
immutable; the set of algorithms is fixed at compile time.
*/

use crate::core::crypto::config::SymmetricAlgorithm;
use crate::core::crypto::curves::CurveId;

/// Curve names and aliases
const CURVE_NAMES: &[(&str, CurveId)] = &[
    ("secp256r1", CurveId::Secp256r1),
    ("prime256v1", CurveId::Secp256r1),
    ("p-256", CurveId::Secp256r1),
    ("p256", CurveId::Secp256r1),
    ("secp384r1", CurveId::Secp384r1),
    ("p-384", CurveId::Secp384r1),
    ("p384", CurveId::Secp384r1),
    ("secp256k1", CurveId::Secp256k1),
    ("k256", CurveId::Secp256k1),
];

/// AEAD names and aliases
const SYMMETRIC_NAMES: &[(&str, SymmetricAlgorithm)] = &[
    ("aes-256-gcm", SymmetricAlgorithm::Aes256Gcm),
    ("aes256gcm", SymmetricAlgorithm::Aes256Gcm),
    ("aes/gcm/nopadding", SymmetricAlgorithm::Aes256Gcm),
    ("chacha20-poly1305", SymmetricAlgorithm::ChaCha20Poly1305),
    ("chacha20poly1305", SymmetricAlgorithm::ChaCha20Poly1305),
];

fn lookup<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    let needle = name.trim().to_ascii_lowercase();
    table
        .iter()
        .find(|(candidate, _)| *candidate == needle)
        .map(|(_, value)| *value)
}

/// Find a curve by name or alias
pub fn lookup_curve(name: &str) -> Option<CurveId> {
    lookup(CURVE_NAMES, name)
}

/// Find an AEAD algorithm by name or alias, whether or not it is compiled in
pub fn lookup_symmetric(name: &str) -> Option<SymmetricAlgorithm> {
    lookup(SYMMETRIC_NAMES, name)
}

/// Canonical names of every supported curve
pub fn list_curves() -> Vec<&'static str> {
    CurveId::ALL.iter().map(CurveId::name).collect()
}

/// Canonical names of the AEAD algorithms available in this build
pub fn list_symmetric_algorithms() -> Vec<&'static str> {
    SymmetricAlgorithm::ALL
        .iter()
        .filter(|algorithm| algorithm.is_available())
        .map(SymmetricAlgorithm::name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_aliases() {
        assert_eq!(lookup_curve("secp256r1"), Some(CurveId::Secp256r1));
        assert_eq!(lookup_curve("prime256v1"), Some(CurveId::Secp256r1));
        assert_eq!(lookup_curve("P-256"), Some(CurveId::Secp256r1));
        assert_eq!(lookup_curve(" SECP384R1 "), Some(CurveId::Secp384r1));
        assert_eq!(lookup_curve("k256"), Some(CurveId::Secp256k1));
        assert_eq!(lookup_curve("sect113r2"), None);
        assert_eq!(lookup_curve(""), None);
    }

    #[test]
    fn test_symmetric_aliases() {
        assert_eq!(lookup_symmetric("AES/GCM/NoPadding"), Some(SymmetricAlgorithm::Aes256Gcm));
        assert_eq!(
            lookup_symmetric("ChaCha20-Poly1305"),
            Some(SymmetricAlgorithm::ChaCha20Poly1305)
        );
        assert_eq!(lookup_symmetric("des"), None);
    }

    #[test]
    fn test_listings() {
        assert_eq!(list_curves(), vec!["secp256r1", "secp384r1", "secp256k1"]);

        let symmetric = list_symmetric_algorithms();
        assert!(symmetric.contains(&"chacha20-poly1305"));
        assert_eq!(symmetric.contains(&"aes-256-gcm"), cfg!(feature = "aes-gcm"));
    }
}
