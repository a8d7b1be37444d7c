use ecc_aead::{
    Cipher, Ciphertext, Error, SharedKey, SymmetricAlgorithm, from_hex, normalize, sizes,
    to_hex, to_hex_upper,
};

use proptest::prelude::*;

// Strategy for generating short byte strings
fn short_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=64)
}

// Strategy for generating plaintexts
fn plaintexts() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..512)
}

// Strategy for generating keys
fn keys() -> impl Strategy<Value = SharedKey> {
    any::<[u8; sizes::KEY_SIZE]>().prop_map(SharedKey::from_bytes)
}

// Strategy for picking an algorithm present in this build
fn algorithms() -> impl Strategy<Value = SymmetricAlgorithm> {
    prop_oneof![
        Just(SymmetricAlgorithm::default()),
        Just(SymmetricAlgorithm::ChaCha20Poly1305),
    ]
}

proptest! {
    #[test]
    fn test_hex_round_trip(bytes in short_bytes()) {
        let lower = to_hex(&bytes);
        prop_assert_eq!(lower.len(), 2 * bytes.len());
        prop_assert_eq!(from_hex(&lower).unwrap(), bytes.clone());
        prop_assert_eq!(from_hex(&to_hex_upper(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn test_hex_normalize(bytes in short_bytes()) {
        let upper = to_hex_upper(&bytes);
        prop_assert_eq!(normalize(&upper), to_hex(&bytes));
        prop_assert_eq!(to_hex(from_hex(&upper).unwrap()), normalize(&upper));
    }

    #[test]
    fn test_odd_length_hex_rejected(bytes in short_bytes()) {
        let mut hex_str = to_hex(&bytes);
        hex_str.push('a');
        prop_assert!(matches!(from_hex(&hex_str), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_aead_round_trip(
        key in keys(),
        algorithm in algorithms(),
        plaintext in plaintexts(),
    ) {
        let cipher = Cipher::new(&key, algorithm).unwrap();
        let encrypted = cipher.encrypt(&plaintext).unwrap();
        prop_assert_eq!(encrypted.data().len(), plaintext.len());

        let parsed = Ciphertext::from_hex(&encrypted.to_hex()).unwrap();
        prop_assert_eq!(cipher.decrypt(&parsed).unwrap(), plaintext);
    }

    #[test]
    fn test_tampering_detected(
        key in keys(),
        algorithm in algorithms(),
        plaintext in plaintexts(),
        position in any::<prop::sample::Index>(),
        mask in 1u8..=255,
    ) {
        let cipher = Cipher::new(&key, algorithm).unwrap();
        let mut bytes = cipher.encrypt(&plaintext).unwrap().to_bytes();

        let i = position.index(bytes.len());
        bytes[i] ^= mask;

        let tampered = Ciphertext::from_bytes(&bytes).unwrap();
        prop_assert!(matches!(cipher.decrypt(&tampered), Err(Error::AuthenticationFailure)));
    }
}
