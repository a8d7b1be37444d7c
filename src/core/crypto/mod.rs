/*!
Cryptographic components for the ECC/AEAD pipeline.

This module provides the curve catalog, keypair generation, ECDH key
agreement and authenticated encryption.
*/

// Curve catalog
pub mod curves;

// Keypair generation
pub mod keypair;

// Key agreement and derivation
pub mod key_exchange;

// Authenticated encryption
pub mod cipher;

// Config
pub mod config;

// Name catalog for curves and algorithms
pub mod registry;

// AEAD backends
pub mod algorithms;

// Backend traits
pub mod traits;

pub use cipher::{Cipher, Ciphertext, Nonce};
pub use config::{CryptoConfig, SymmetricAlgorithm};
pub use curves::CurveId;
pub use key_exchange::{SharedKey, SharedSecretDeriver, derive};
pub use keypair::{KeyPair, PrivateKey, PublicKey};
pub use registry::{list_curves, list_symmetric_algorithms, lookup_curve, lookup_symmetric};
