/*!
Constants for the ECC/AEAD pipeline.

This module contains the key, nonce and tag sizes shared by every
supported AEAD algorithm, plus the HKDF domain-separation strings.
*/

/// Crate wire format version, bumped whenever the KDF strings change
pub const VERSION: u8 = 0x01;

/// Size constants for the pipeline
pub mod sizes {
    /// Size of a derived symmetric key in bytes (256 bits)
    pub const KEY_SIZE: usize = 32;

    /// Size of an AEAD nonce in bytes (96 bits)
    pub const NONCE_SIZE: usize = 12;

    /// Size of an AEAD authentication tag in bytes
    pub const TAG_SIZE: usize = 16;

    /// Smallest valid wire bundle: nonce and tag around an empty payload
    pub const MIN_BUNDLE_SIZE: usize = NONCE_SIZE + TAG_SIZE;

    /// Random prefix carried by generated nonces
    pub const NONCE_PREFIX_SIZE: usize = 8;

    /// Counter portion of generated nonces
    pub const NONCE_COUNTER_SIZE: usize = NONCE_SIZE - NONCE_PREFIX_SIZE;
}

/// Salt for HKDF key derivation
pub const HKDF_SALT: &[u8] = b"ecc-aead-v1-hkdf-salt";

/// Info string for HKDF key derivation for AES-256-GCM
pub const HKDF_INFO_AES: &[u8] = b"ecc-aead-v1 AES-256-GCM";

/// Info string for HKDF key derivation for ChaCha20-Poly1305
pub const HKDF_INFO_CHACHA: &[u8] = b"ecc-aead-v1 ChaCha20-Poly1305";

/// Attempts allowed when sampling a private scalar before giving up.
///
/// A uniformly random field element lands outside the scalar range with
/// probability below 2^-32 on every supported curve.
pub const MAX_SCALAR_SAMPLING_ATTEMPTS: usize = 16;
