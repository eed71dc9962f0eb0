//! Storage directory utilities
//!
//! Resolves the critical data root the same way the stores do
//! (`CRITICAL_DATA_DIR`, then the platform data directory) and enumerates
//! the category directories below it.

use anyhow::{Context, Result};
use foundation::{FileCategory, FoundationConfig};
use std::path::{Path, PathBuf};

/// Critical data root: explicit override, else the configured location.
pub fn data_dir(override_dir: Option<PathBuf>) -> PathBuf {
    override_dir.unwrap_or_else(|| FoundationConfig::from_env().data_dir)
}

/// Names of all category directories under `data_dir`, sorted.
pub fn list_categories(data_dir: &Path) -> Result<Vec<String>> {
    if !data_dir.exists() {
        return Ok(Vec::new());
    }

    let mut categories = Vec::new();
    for entry in std::fs::read_dir(data_dir)
        .with_context(|| format!("Failed to read data directory: {}", data_dir.display()))?
    {
        let path = entry?.path();
        if path.is_dir()
            && let Some(name) = path.file_name().and_then(|n| n.to_str())
        {
            categories.push(name.to_string());
        }
    }

    categories.sort();
    Ok(categories)
}

/// `category` if given (it must exist), otherwise every category.
pub fn select_categories(data_dir: &Path, category: Option<&str>) -> Result<Vec<String>> {
    let categories = list_categories(data_dir)?;
    match category {
        Some(name) if categories.iter().any(|c| c == name) => Ok(vec![name.to_string()]),
        Some(name) => anyhow::bail!(
            "Category not found: {}\n\nHint: available categories: {}",
            name,
            if categories.is_empty() {
                "(none)".to_string()
            } else {
                categories.join(", ")
            }
        ),
        None => Ok(categories),
    }
}

pub fn open_category(data_dir: &Path, category: &str) -> Result<FileCategory> {
    FileCategory::open(data_dir, category)
        .with_context(|| format!("Failed to open category '{}'", category))
}
