/*!
Hexadecimal transcoding for the text-safe wire format.

Encoding is deterministic with two digits per byte. Decoding accepts either
case, so `to_hex(from_hex(s))` is the lowercase form of any well-formed `s`.
*/

use crate::core::error::{Error, Result};

/// Encode bytes as lowercase hex
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Encode bytes as uppercase hex
pub fn to_hex_upper(bytes: impl AsRef<[u8]>) -> String {
    hex::encode_upper(bytes)
}

/// Decode a hex string of either case.
///
/// Fails with [`Error::InvalidInput`] on odd length or non-hex characters.
pub fn from_hex(hex_str: &str) -> Result<Vec<u8>> {
    if hex_str.len() % 2 != 0 {
        return crate::invalid_input_err!(
            "hex string has odd length {}",
            hex_str.len()
        );
    }
    hex::decode(hex_str).map_err(Error::from)
}

/// Decode hex into a fixed-size array
pub fn from_hex_array<const N: usize>(hex_str: &str) -> Result<[u8; N]> {
    let bytes = from_hex(hex_str)?;
    let len = bytes.len();
    <[u8; N]>::try_from(bytes).map_err(|_| {
        Error::InvalidInput(format!("expected {} bytes, got {}", N, len))
    })
}

/// Canonical form of a hex string (lowercase)
pub fn normalize(hex_str: &str) -> String {
    hex_str.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(b""), "");
        assert_eq!(to_hex([0x00u8, 0x0f, 0xa5, 0xff]), "000fa5ff");
        assert_eq!(to_hex_upper([0x00u8, 0x0f, 0xa5, 0xff]), "000FA5FF");
    }

    #[test]
    fn test_from_hex_accepts_both_cases() {
        assert_eq!(from_hex("deadBEEF").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(to_hex(from_hex("DEADbeef").unwrap()), normalize("DEADbeef"));
    }

    #[test]
    fn test_from_hex_odd_length() {
        let result = from_hex("abc");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_from_hex_invalid_characters() {
        assert!(matches!(from_hex("zz"), Err(Error::InvalidInput(_))));
        assert!(matches!(from_hex("0g"), Err(Error::InvalidInput(_))));
        assert!(matches!(from_hex("  "), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_from_hex_array() {
        let arr: [u8; 2] = from_hex_array("beef").unwrap();
        assert_eq!(arr, [0xbe, 0xef]);

        let result: Result<[u8; 4]> = from_hex_array("beef");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
