/*!
Error handling for the ECC/AEAD pipeline.

Every fallible operation returns [`Result`]. Errors raised while opening a
ciphertext carry no detail beyond [`Error::AuthenticationFailure`].
*/

use std::io;
use thiserror::Error;

use crate::core::crypto::curves::CurveId;

/// Result type for the pipeline
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// Curve name not present in the catalog
    #[error("Unsupported curve: {0}")]
    UnsupportedCurve(String),

    /// AEAD algorithm name not present in the catalog, or compiled out
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Private scalar sampling failed
    #[error("Key generation failed")]
    KeyGeneration,

    /// Private and public key live on different curves
    #[error("Curve mismatch: local key is {local}, peer key is {peer}")]
    CurveMismatch {
        local: CurveId,
        peer: CurveId,
    },

    /// Key agreement error (limited details for security)
    #[error("Key agreement failed")]
    KeyAgreement(#[from] KeyAgreementError),

    /// Tag verification failed. Carries no detail
    #[error("Authentication failed")]
    AuthenticationFailure,

    /// Decrypted bytes are not valid UTF-8
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Malformed hex, truncated bundle or wrong length
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Caller-supplied nonce was already used under this key
    #[error("Nonce already used under this key")]
    NonceReuse,

    /// Generated-nonce counter reached its limit
    #[error("Nonce counter exhausted, derive a new key")]
    NonceExhausted,
}

/// Key agreement errors with limited details to prevent leaking information
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAgreementError {
    /// Peer public key is not a valid, non-identity point on the curve
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// HKDF expansion failed
    #[error("Key derivation failed")]
    KeyDerivationFailed,
}

impl From<hex::FromHexError> for Error {
    fn from(error: hex::FromHexError) -> Self {
        Error::InvalidInput(format!("malformed hex: {}", error))
    }
}

/// Create an invalid input error
#[macro_export]
macro_rules! invalid_input_err {
    ($msg:expr) => {
        Err($crate::core::error::Error::InvalidInput($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        Err($crate::core::error::Error::InvalidInput(format!($fmt, $($arg)*)))
    };
}

/// Convert from Error to io::Error (for compatibility)
impl From<Error> for io::Error {
    fn from(error: Error) -> Self {
        match error {
            Error::UnsupportedCurve(name) => io::Error::new(
                io::ErrorKind::Unsupported,
                format!("Unsupported curve: {}", name),
            ),
            Error::UnsupportedAlgorithm(name) => io::Error::new(
                io::ErrorKind::Unsupported,
                format!("Unsupported algorithm: {}", name),
            ),
            Error::KeyGeneration => io::Error::other("Key generation failed"),
            Error::CurveMismatch { .. } => {
                io::Error::new(io::ErrorKind::InvalidInput, "Curve mismatch")
            }
            Error::KeyAgreement(_) => {
                io::Error::new(io::ErrorKind::InvalidData, "Key agreement error")
            }
            Error::AuthenticationFailure => {
                io::Error::new(io::ErrorKind::PermissionDenied, "Authentication failed")
            }
            Error::Encoding(msg) => io::Error::new(io::ErrorKind::InvalidData, msg),
            Error::InvalidInput(msg) => io::Error::new(io::ErrorKind::InvalidInput, msg),
            Error::NonceReuse => io::Error::new(io::ErrorKind::InvalidInput, "Nonce reuse"),
            Error::NonceExhausted => io::Error::other("Nonce counter exhausted"),
        }
    }
}
