//! Optional compression stage wrapped around value encodings.

use super::CodecError;

/// Compression policy of a block. Fixed for the block's lifetime so that
/// every value it writes can be read back by the same block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Compression {
    #[default]
    None,
    /// zstd with the given level (1-22).
    Zstd { level: i32 },
}

impl Compression {
    /// Default zstd level (3 balances speed and ratio).
    pub const DEFAULT_ZSTD_LEVEL: i32 = 3;

    pub const fn zstd() -> Self {
        Self::Zstd {
            level: Self::DEFAULT_ZSTD_LEVEL,
        }
    }

    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Zstd { .. })
    }

    pub fn compress(&self, bytes: Vec<u8>) -> Result<Vec<u8>, CodecError> {
        match self {
            Self::None => Ok(bytes),
            Self::Zstd { level } => zstd::encode_all(bytes.as_slice(), *level)
                .map_err(|e| CodecError::Compress(e.to_string())),
        }
    }

    pub fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>, CodecError> {
        match self {
            Self::None => Ok(bytes.to_vec()),
            Self::Zstd { .. } => {
                zstd::decode_all(bytes).map_err(|e| CodecError::Decompress(e.to_string()))
            }
        }
    }
}
