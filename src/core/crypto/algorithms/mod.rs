/*!
Implementations of cryptographic algorithms.
*/

// Symmetric encryption algorithms
pub mod symmetric;

pub use symmetric::create_cipher;
