//! Value encodings for critical data.
//!
//! Each storable type implements [`CriticalValue`], choosing its encoding at
//! compile time:
//! - **Compact**: fixed-width little-endian primitives, UTF-8 strings and raw
//!   byte vectors (see [`compact`])
//! - **Structural**: any serde type encoded with bincode, via [`Structural`]
//!   or the [`structural_value!`](crate::structural_value) macro
//!
//! Compression is an independent stage applied by blocks on top of either
//! encoding (see [`Compression`]).

mod compact;
mod compression;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use compression::Compression;

/// Which encoder produced a value's bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Encoding {
    Compact,
    Structural,
}

/// A type that can be stored as critical data.
pub trait CriticalValue: Sized {
    const ENCODING: Encoding;

    fn encode(&self) -> Result<Vec<u8>, CodecError>;

    fn decode(bytes: &[u8]) -> Result<Self, CodecError>;
}

/// Decoding/encoding failures. All of these mean "the bytes are corrupt or of
/// the wrong type"; a missing value is reported by the block, never here.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("{type_name} expects {expected} bytes, got {actual}")]
    Length {
        type_name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid {type_name} encoding")]
    Malformed { type_name: &'static str },

    #[error("string is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("structural encoding failed: {0}")]
    Structural(String),

    #[error("compression failed: {0}")]
    Compress(String),

    #[error("decompression failed: {0}")]
    Decompress(String),
}

/// Wrapper selecting the bincode-based structural encoding for `T`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Structural<T>(pub T);

impl<T> Structural<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> CriticalValue for Structural<T>
where
    T: Serialize + DeserializeOwned,
{
    const ENCODING: Encoding = Encoding::Structural;

    fn encode(&self) -> Result<Vec<u8>, CodecError> {
        encode_structural(&self.0)
    }

    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        decode_structural(bytes).map(Structural)
    }
}

/// Encodes any serde value with bincode.
pub fn encode_structural<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CodecError> {
    bincode::serialize(value).map_err(|e| CodecError::Structural(e.to_string()))
}

/// Decodes a bincode-encoded serde value.
pub fn decode_structural<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    bincode::deserialize(bytes).map_err(|e| CodecError::Structural(e.to_string()))
}

/// Implements [`CriticalValue`] with the structural encoding for serde types.
///
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct Meters { coin_in: u64, coin_out: u64 }
///
/// critical_data::structural_value!(Meters);
/// ```
#[macro_export]
macro_rules! structural_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::codec::CriticalValue for $ty {
                const ENCODING: $crate::codec::Encoding = $crate::codec::Encoding::Structural;

                fn encode(&self) -> ::std::result::Result<Vec<u8>, $crate::codec::CodecError> {
                    $crate::codec::encode_structural(self)
                }

                fn decode(bytes: &[u8]) -> ::std::result::Result<Self, $crate::codec::CodecError> {
                    $crate::codec::decode_structural(bytes)
                }
            }
        )+
    };
}
