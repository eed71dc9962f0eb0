//! File-backed remote category.

use std::fs;
use std::path::{Path, PathBuf};

use critical_data::{Checksum, DataName, RemoteCategory, RemoteError, Result};
use serde::{Deserialize, Serialize};

const RECORD_SUFFIX: &str = ".bin";

/// On-disk form of one item: its bytes and their SHA-256 checksum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub checksum: Checksum,
    pub bytes: Vec<u8>,
}

impl StoredRecord {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            checksum: Checksum::of(&bytes),
            bytes,
        }
    }

    /// Checks the stored bytes against the stored checksum.
    pub fn verify(&self, name: &DataName) -> Result<()> {
        self.checksum.verify(name, &self.bytes)
    }
}

/// Remote category persisted as one directory per category.
///
/// # File Format
///
/// Items are stored as `{name}.bin`, each a bincode-encoded [`StoredRecord`].
/// Writes go to `{name}.bin.tmp` first and are renamed into place, so a
/// crash never leaves a half-written record behind. Reads recompute the
/// checksum and fail with an integrity error on mismatch.
#[derive(Debug)]
pub struct FileCategory {
    category: String,
    dir: PathBuf,
}

impl FileCategory {
    /// Opens (creating if needed) `root/category`.
    pub fn open(root: impl AsRef<Path>, category: impl Into<String>) -> Result<Self> {
        let category = category.into();
        let dir = root.as_ref().join(&category);
        fs::create_dir_all(&dir).map_err(RemoteError::Io)?;
        Ok(Self { category, dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, name: &DataName) -> PathBuf {
        self.dir.join(format!("{}{}", name, RECORD_SUFFIX))
    }

    /// Loads the record for `name` without verifying it.
    pub fn load_record(&self, name: &DataName) -> Result<Option<StoredRecord>> {
        let path = self.record_path(name);
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RemoteError::Io)?;
        let record = bincode::deserialize(&bytes)
            .map_err(|e| RemoteError::Serialization(format!("{}: {}", path.display(), e)))?;
        Ok(Some(record))
    }

    fn save_record(&self, name: &DataName, record: &StoredRecord) -> Result<()> {
        let path = self.record_path(name);
        let temp_path = path.with_extension("bin.tmp");

        let bytes =
            bincode::serialize(record).map_err(|e| RemoteError::Serialization(e.to_string()))?;
        fs::write(&temp_path, bytes).map_err(RemoteError::Io)?;
        fs::rename(&temp_path, &path).map_err(RemoteError::Io)?;

        tracing::trace!("Saved '{}' to {}", name, path.display());
        Ok(())
    }

    /// Names of every stored record, sorted.
    pub fn names(&self) -> Result<Vec<DataName>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.dir).map_err(RemoteError::Io)? {
            let path = entry.map_err(RemoteError::Io)?.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(stem) = filename.strip_suffix(RECORD_SUFFIX)
                && let Ok(name) = DataName::new(stem)
            {
                names.push(name);
            }
        }

        names.sort_unstable();
        Ok(names)
    }

    /// Loads and verifies every record. Faults are reported per name.
    pub fn verify_all(&self) -> Result<Vec<(DataName, Result<()>)>> {
        let names = self.names()?;
        Ok(names
            .into_iter()
            .map(|name| {
                let outcome = self
                    .load_record(&name)
                    .and_then(|record| match record {
                        Some(record) => record.verify(&name),
                        None => Ok(()),
                    });
                (name, outcome)
            })
            .collect())
    }
}

impl RemoteCategory for FileCategory {
    fn category(&self) -> &str {
        &self.category
    }

    fn read(&self, names: &[DataName]) -> Result<Vec<(DataName, Vec<u8>)>> {
        let mut items = Vec::with_capacity(names.len());
        for name in names {
            if let Some(record) = self.load_record(name)? {
                record.verify(name)?;
                items.push((name.clone(), record.bytes));
            }
        }
        tracing::debug!(
            "Read {}/{} items from category '{}'",
            items.len(),
            names.len(),
            self.category
        );
        Ok(items)
    }

    /// Each record is replaced atomically; a failure part way through keeps
    /// the records already written.
    fn write(&self, items: &[(DataName, Vec<u8>)]) -> Result<()> {
        for (name, bytes) in items {
            self.save_record(name, &StoredRecord::new(bytes.clone()))?;
        }
        tracing::debug!(
            "Wrote {} items to category '{}'",
            items.len(),
            self.category
        );
        Ok(())
    }

    fn remove(&self, names: &[DataName]) -> Result<()> {
        for name in names {
            let path = self.record_path(name);
            if path.exists() {
                fs::remove_file(&path).map_err(RemoteError::Io)?;
                tracing::trace!("Deleted '{}' from category '{}'", name, self.category);
            }
        }
        Ok(())
    }
}
