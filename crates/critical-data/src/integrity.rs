//! SHA-256 checksums guarding persisted critical data.
//!
//! A mismatch is always surfaced as [`CriticalDataError::Integrity`]; content
//! is never repaired in place.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{CriticalDataError, Result};
use crate::name::DataName;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checksum([u8; 32]);

impl Checksum {
    pub fn of(bytes: &[u8]) -> Self {
        Self(Sha256::digest(bytes).into())
    }

    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Recomputes the checksum of `bytes` and compares it with `self`.
    pub fn verify(&self, name: &DataName, bytes: &[u8]) -> Result<()> {
        let actual = Self::of(bytes);
        if actual == *self {
            Ok(())
        } else {
            tracing::error!(
                "Integrity fault for '{}': expected {}, found {}",
                name,
                self.to_hex(),
                actual.to_hex()
            );
            Err(CriticalDataError::Integrity {
                name: name.clone(),
                expected: self.to_hex(),
                actual: actual.to_hex(),
            })
        }
    }
}

impl fmt::Debug for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checksum({})", &self.to_hex()[..16])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_checksum_is_deterministic() {
        assert_eq!(Checksum::of(b"credits"), Checksum::of(b"credits"));
        assert_ne!(Checksum::of(b"credits"), Checksum::of(b"credit"));
        assert_eq!(Checksum::of(b"").to_hex().len(), 64);
    }

    #[test]
    fn test_verify_reports_mismatch() {
        let name = DataName::new("credits").unwrap();
        let checksum = Checksum::of(b"100");

        assert!(checksum.verify(&name, b"100").is_ok());

        let err = checksum.verify(&name, b"900").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Integrity);
        match err {
            CriticalDataError::Integrity {
                expected, actual, ..
            } => {
                assert_eq!(expected, checksum.to_hex());
                assert_eq!(actual, Checksum::of(b"900").to_hex());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
