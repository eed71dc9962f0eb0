//! Error types surfaced by the critical data layer.
//!
//! Every failure a caller can observe maps onto one [`ErrorKind`], so call
//! sites can branch on the category (argument, access, integrity, ...) without
//! matching individual variants.

use thiserror::Error;

use crate::access::AccessKind;
use crate::codec::CodecError;
use crate::name::DataName;

pub type Result<T> = std::result::Result<T, CriticalDataError>;

/// Errors surfaced by blocks, caches, stores and validators.
#[derive(Debug, Error)]
pub enum CriticalDataError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("invalid data name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("{access} access to store '{store}' denied: {rule}")]
    AccessDenied {
        store: String,
        access: AccessKind,
        rule: &'static str,
    },

    #[error("integrity fault for '{name}': expected checksum {expected}, found {actual}")]
    Integrity {
        name: DataName,
        expected: String,
        actual: String,
    },

    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    #[error("store '{store}' is not initialized with a remote category")]
    NotReady { store: String },

    #[error("data '{0}' not found")]
    NotFound(DataName),

    #[error("block is fixed to '{expected}', got '{actual}'")]
    NameMismatch { expected: DataName, actual: DataName },

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Failures reported by a remote category implementation.
///
/// These are propagated unchanged through the adapter and cached store.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("remote category lock was poisoned")]
    LockPoisoned,

    #[error("remote category unavailable: {0}")]
    Unavailable(String),
}

/// Coarse classification of [`CriticalDataError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Null/empty inputs or malformed names. Never retried.
    InvalidArgument,
    /// Rejected by an access validator for the current mode/phase.
    AccessDenied,
    /// Stored content does not match its checksum.
    Integrity,
    /// Programming-contract violation (e.g. deleting from a single-entry block).
    Unsupported,
    /// Store used before a remote category was attached.
    NotReady,
    /// Lookup of a name absent from a block.
    NotFound,
    /// Bytes could not be encoded/decoded as the requested type.
    Codec,
    /// Transport failure from the remote category.
    Remote,
}

impl CriticalDataError {
    /// Returns the taxonomy bucket of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) | Self::InvalidName { .. } => ErrorKind::InvalidArgument,
            Self::AccessDenied { .. } => ErrorKind::AccessDenied,
            Self::Integrity { .. } => ErrorKind::Integrity,
            Self::Unsupported(_) => ErrorKind::Unsupported,
            Self::NotReady { .. } => ErrorKind::NotReady,
            Self::NotFound(_) | Self::NameMismatch { .. } => ErrorKind::NotFound,
            Self::Codec(_) => ErrorKind::Codec,
            Self::Remote(_) => ErrorKind::Remote,
        }
    }

    /// Only transport failures may succeed on a later attempt.
    pub const fn is_retryable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Remote)
    }
}
