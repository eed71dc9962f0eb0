//! Storage configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use critical_data::{BlockOptions, Compression};

/// Where remote categories keep their items.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Backend {
    /// One directory per category under the data directory.
    #[default]
    File,
    /// Process-local maps; nothing survives a restart.
    Memory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
enum CompressionMode {
    None,
    Zstd,
}

/// Configuration for wiring stores to the foundation storage.
#[derive(Clone, Debug)]
pub struct FoundationConfig {
    pub data_dir: PathBuf,
    pub backend: Backend,
    pub compression: Compression,
    pub describe: bool,
}

impl Default for FoundationConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            backend: Backend::default(),
            compression: Compression::None,
            describe: false,
        }
    }
}

impl FoundationConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CRITICAL_DATA_DIR` - Root of file categories (default: platform-specific)
    /// - `CRITICAL_DATA_BACKEND` - `file` or `memory` (default: file)
    /// - `CRITICAL_DATA_COMPRESSION` - `none` or `zstd` (default: none)
    /// - `CRITICAL_DATA_ZSTD_LEVEL` - zstd level, clamped to 1..=22 (default: 3)
    /// - `CRITICAL_DATA_DESCRIBE` - Build block diagnostics strings (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("CRITICAL_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(backend) = read_env::<Backend>("CRITICAL_DATA_BACKEND") {
            config.backend = backend;
        }

        if let Some(CompressionMode::Zstd) = read_env::<CompressionMode>("CRITICAL_DATA_COMPRESSION")
        {
            let level = read_env::<i32>("CRITICAL_DATA_ZSTD_LEVEL")
                .unwrap_or(Compression::DEFAULT_ZSTD_LEVEL)
                .clamp(1, 22);
            config.compression = Compression::Zstd { level };
        }

        if let Some(describe) = read_env::<bool>("CRITICAL_DATA_DESCRIBE") {
            config.describe = describe;
        }

        config
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Block options every store is built with.
    pub fn block_options(&self) -> BlockOptions {
        BlockOptions::new(self.compression).with_describe(self.describe)
    }
}

/// Platform-specific data directory.
///
/// - Linux: `~/.local/share/critical-data` (or `$XDG_DATA_HOME/critical-data`)
/// - macOS: `~/Library/Application Support/critical-data`
/// - Fallback: `./critical_data`
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "critical-data")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./critical_data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parses_case_insensitively() {
        assert_eq!("Memory".parse::<Backend>().unwrap(), Backend::Memory);
        assert_eq!("file".parse::<Backend>().unwrap(), Backend::File);
        assert!("sqlite".parse::<Backend>().is_err());
    }

    #[test]
    fn test_block_options_follow_config() {
        let config = FoundationConfig::default()
            .with_compression(Compression::zstd())
            .with_backend(Backend::Memory);

        let options = config.block_options();
        assert_eq!(options.compression, Compression::zstd());
        assert!(!options.describe);
    }
}
