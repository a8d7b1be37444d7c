/*!
# ECC AEAD

Elliptic-curve key agreement and authenticated encryption for short text
payloads carried over a text-safe (hex) channel.

## Overview

- Keypairs on a fixed catalog of SEC curves (secp256r1, secp384r1, secp256k1)
- ECDH with the shared x-coordinate run through HKDF-SHA256
- AES-256-GCM or ChaCha20-Poly1305 with a fresh nonce for every message
- Hex wire format `nonce || ciphertext || tag`

```no_run
use ecc_aead::{Cipher, CurveId, KeyPair, derive};

let alice = KeyPair::generate(CurveId::Secp256r1)?;
let bob = KeyPair::generate(CurveId::Secp256r1)?;

let alice_key = derive(alice.private_key(), bob.public_key())?;
let bob_key = derive(bob.private_key(), alice.public_key())?;

let wire = Cipher::with_default_algorithm(&alice_key)?.encrypt_string("hello")?;
let text = Cipher::with_default_algorithm(&bob_key)?.decrypt_string(&wire)?;
assert_eq!(text, "hello");
# Ok::<(), ecc_aead::Error>(())
```

Public-key transport, peer authentication and session lifecycle are left to
the caller.
*/

// Core pipeline components
pub mod core;

// Free-function API
pub mod api;

// Serialization support (optional)
#[cfg(feature = "serde-support")]
pub mod serde;

// Re-export commonly used types for convenience
pub use crate::core::constants::{VERSION, sizes};
pub use crate::core::crypto::{
    Cipher, Ciphertext, CryptoConfig, CurveId, KeyPair, Nonce, PrivateKey, PublicKey, SharedKey,
    SharedSecretDeriver, SymmetricAlgorithm, derive, list_curves, list_symmetric_algorithms,
};
pub use crate::core::encoding::{from_hex, normalize, to_hex, to_hex_upper};
pub use crate::core::error::{Error, KeyAgreementError, Result};
