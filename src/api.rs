/*!
High-level API for the ECC/AEAD pipeline.

Free functions for callers that want a flat interface: generate a keypair by
curve name, derive a shared key, and move UTF-8 text through the hex wire
format. Every call uses the default AEAD algorithm and a fresh nonce.
*/

use crate::core::{
    crypto::{Cipher, KeyPair, Nonce, PrivateKey, PublicKey, SharedKey, key_exchange},
    encoding,
    error::Result,
};

/// Generate a keypair on a named curve such as `"secp256r1"`
pub fn generate_keypair(curve_name: &str) -> Result<KeyPair> {
    KeyPair::generate_named(curve_name)
}

/// Derive the shared symmetric key from our private key and the peer's public key
pub fn generate_shared_secret(
    private_key: &PrivateKey,
    peer_public: &PublicKey,
) -> Result<SharedKey> {
    key_exchange::derive(private_key, peer_public)
}

/// Encrypt UTF-8 text under `key`, returning the hex wire form.
///
/// The nonce is drawn fully at random on every call.
pub fn encrypt_string(key: &SharedKey, plaintext: &str) -> Result<String> {
    let cipher = Cipher::with_default_algorithm(key)?;
    Ok(cipher.encrypt_with_nonce(Nonce::random(), plaintext.as_bytes())?.to_hex())
}

/// Decrypt the hex wire form under `key` back into UTF-8 text
pub fn decrypt_string(key: &SharedKey, ciphertext_hex: &str) -> Result<String> {
    Cipher::with_default_algorithm(key)?.decrypt_string(ciphertext_hex)
}

/// Encode bytes as uppercase hex
pub fn bytes_to_hex(data: &[u8]) -> String {
    encoding::to_hex_upper(data)
}

/// Decode hex of either case into bytes
pub fn hex_to_bytes(hex_str: &str) -> Result<Vec<u8>> {
    encoding::from_hex(hex_str)
}
