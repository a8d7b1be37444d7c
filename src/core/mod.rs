//! Core components for the ECC/AEAD pipeline.
//!
//! This module contains the cryptographic building blocks, the hex
//! transcoder, constants and error handling.

// Export cryptographic functionality
pub mod crypto;

// Hex transcoding for the wire format
pub mod encoding;

// Pipeline constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::constants::VERSION;
pub use self::error::{Error, KeyAgreementError, Result};
