/*!
Core traits for cryptographic operations.
*/

pub mod cipher;

pub use cipher::SymmetricCipher;
