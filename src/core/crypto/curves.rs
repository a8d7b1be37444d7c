/*!
Elliptic curve catalog.

Only prime-field SEC curves with a pure-Rust arithmetic backend are offered.
Binary curves such as `sect113r2` are rejected by name lookup.
*/

use std::fmt;
use std::str::FromStr;

use crate::core::crypto::registry;
use crate::core::error::{Error, Result};

/// Supported named curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurveId {
    /// NIST P-256 (secp256r1, prime256v1)
    #[default]
    Secp256r1,
    /// NIST P-384 (secp384r1)
    Secp384r1,
    /// SEC secp256k1
    Secp256k1,
}

impl CurveId {
    /// Every curve in the catalog
    pub const ALL: [CurveId; 3] = [CurveId::Secp256r1, CurveId::Secp384r1, CurveId::Secp256k1];

    /// Canonical SEC name of the curve
    pub fn name(&self) -> &'static str {
        match self {
            CurveId::Secp256r1 => "secp256r1",
            CurveId::Secp384r1 => "secp384r1",
            CurveId::Secp256k1 => "secp256k1",
        }
    }

    /// Size of a field element (and of the ECDH x-coordinate) in bytes
    pub fn field_size(&self) -> usize {
        match self {
            CurveId::Secp256r1 | CurveId::Secp256k1 => 32,
            CurveId::Secp384r1 => 48,
        }
    }

    /// Size of a SEC1-encoded public key in bytes
    pub fn public_key_size(&self, compressed: bool) -> usize {
        if compressed {
            1 + self.field_size()
        } else {
            1 + 2 * self.field_size()
        }
    }

    /// Resolve a curve name or alias through the catalog
    pub fn from_name(name: &str) -> Result<Self> {
        registry::lookup_curve(name).ok_or_else(|| Error::UnsupportedCurve(name.to_string()))
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CurveId::from_name(s)
    }
}
