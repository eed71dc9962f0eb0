//! Read and inspect one stored item
//!
//! Loads `{name}.bin` from a category, checks its checksum and prints the
//! stored bytes. Bytes are shown as stored: values of a compressed store
//! appear compressed.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use critical_data::DataName;
use foundation::StoredRecord;
use serde::Serialize;
use std::path::PathBuf;

use super::format_bytes;
use crate::dirs;

/// Read and inspect a stored item
#[derive(Parser)]
pub struct Read {
    /// Category holding the item (e.g., shell)
    #[arg(value_name = "CATEGORY")]
    category: String,

    /// Data name of the item (e.g., credits)
    #[arg(value_name = "NAME")]
    name: String,

    /// Custom data directory (defaults to CRITICAL_DATA_DIR or platform-specific location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Size, checksum status and a short hex preview
    Summary,
    /// Full hex dump
    Hex,
    /// Bytes decoded as UTF-8 (lossy)
    Utf8,
    /// JSON document with checksum and hex bytes
    Json,
}

#[derive(Serialize)]
struct RecordReport<'a> {
    category: &'a str,
    name: &'a str,
    size: usize,
    checksum: String,
    verified: bool,
    bytes: String,
}

impl Read {
    pub fn execute(self) -> Result<()> {
        let data_dir = dirs::data_dir(self.data_dir);
        dirs::select_categories(&data_dir, Some(&self.category))?;

        let name = DataName::new(self.name.as_str())
            .with_context(|| format!("Invalid data name: {}", self.name))?;
        let category = dirs::open_category(&data_dir, &self.category)?;

        let record = category
            .load_record(&name)
            .with_context(|| format!("Failed to load '{}' from '{}'", name, self.category))?
            .with_context(|| {
                format!(
                    "Item not found: {}\n\nHint: run `cargo xtask list --category {}`",
                    name, self.category
                )
            })?;
        let verified = record.verify(&name).is_ok();

        match self.format {
            OutputFormat::Summary => print_summary(&self.category, &name, &record, verified),
            OutputFormat::Hex => println!("{}", hex::encode(&record.bytes)),
            OutputFormat::Utf8 => println!("{}", String::from_utf8_lossy(&record.bytes)),
            OutputFormat::Json => {
                let report = RecordReport {
                    category: &self.category,
                    name: name.as_str(),
                    size: record.bytes.len(),
                    checksum: record.checksum.to_hex(),
                    verified,
                    bytes: hex::encode(&record.bytes),
                };
                let json = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize record to JSON")?;
                println!("{}", json);
            }
        }

        if !verified {
            anyhow::bail!("Checksum mismatch for '{}' in '{}'", name, self.category);
        }
        Ok(())
    }
}

fn print_summary(category: &str, name: &DataName, record: &StoredRecord, verified: bool) {
    const PREVIEW: usize = 32;

    println!("{} {}/{}", style("Item:").bold().cyan(), category, name);
    println!(
        "{} {}",
        style("Size:").bold().cyan(),
        format_bytes(record.bytes.len())
    );
    println!(
        "{} {} {}",
        style("Checksum:").bold().cyan(),
        record.checksum.to_hex(),
        if verified {
            style("✓").green()
        } else {
            style("✗ mismatch").red().bold()
        }
    );

    let preview = &record.bytes[..record.bytes.len().min(PREVIEW)];
    let ellipsis = if record.bytes.len() > PREVIEW { "…" } else { "" };
    println!(
        "{} {}{}",
        style("Bytes:").bold().cyan(),
        hex::encode(preview),
        ellipsis
    );
}
