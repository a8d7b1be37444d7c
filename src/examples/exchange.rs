use ecc_aead::{CryptoConfig, KeyPair, Result, api};

fn main() -> Result<()> {
    env_logger::init();

    println!("ECC AEAD Exchange Example");
    println!("=========================");

    let config = CryptoConfig::from_names("secp256r1", "aes-256-gcm")?;
    println!("Curve: {}, cipher: {}", config.curve_name(), config.symmetric_name());

    // Each side generates a keypair on the agreed curve
    let alice = config.generate_keypair()?;
    let bob = config.generate_keypair()?;
    println!("Alice public key: {}", alice.public_key().to_hex());
    println!("Bob public key:   {}", bob.public_key().to_hex());

    // Public keys travel as hex; each side parses the other's
    let bob_public = ecc_aead::PublicKey::from_hex(config.curve, &bob.public_key().to_hex())?;
    let alice_public = ecc_aead::PublicKey::from_hex(config.curve, &alice.public_key().to_hex())?;

    let deriver = config.deriver();
    let alice_key = deriver.derive(alice.private_key(), &bob_public)?;
    let bob_key = deriver.derive(bob.private_key(), &alice_public)?;

    let alice_cipher = config.cipher(&alice_key)?;
    let bob_cipher = config.cipher(&bob_key)?;

    for message in ["hello", "hello", "a longer message from Alice"] {
        let wire = alice_cipher.encrypt_string(message)?;
        println!("Alice -> Bob: {}", wire);
        println!("Bob reads:    {}", bob_cipher.decrypt_string(&wire)?);
    }

    // Tampering is detected on the receiving side
    let mut wire = api::hex_to_bytes(&alice_cipher.encrypt_string("do not touch")?)?;
    if let Some(last) = wire.last_mut() {
        *last ^= 0x01;
    }
    match bob_cipher.decrypt_string(&api::bytes_to_hex(&wire)) {
        Ok(_) => println!("Tampered message was accepted"),
        Err(e) => println!("Tampered message rejected: {}", e),
    }

    // A key on another curve cannot be combined with ours
    let stranger = KeyPair::generate_named("secp256k1")?;
    if let Err(e) = deriver.derive(alice.private_key(), stranger.public_key()) {
        println!("Cross-curve agreement rejected: {}", e);
    }

    Ok(())
}
