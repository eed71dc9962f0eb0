//! Verify checksums of stored records
//!
//! Recomputes the SHA-256 checksum of every record and exits with an error
//! if any record is unreadable or does not match.

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use crate::dirs;

/// Verify checksums of stored records
#[derive(Parser, Debug)]
pub struct Verify {
    /// Only verify this category
    #[arg(short, long, value_name = "CATEGORY")]
    category: Option<String>,

    /// Custom data directory (defaults to CRITICAL_DATA_DIR or platform-specific location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Verify {
    pub fn execute(self) -> Result<()> {
        let data_dir = dirs::data_dir(self.data_dir);
        let categories = dirs::select_categories(&data_dir, self.category.as_deref())?;

        let mut checked = 0;
        let mut faults = 0;

        for category_name in categories {
            let category = dirs::open_category(&data_dir, &category_name)?;
            for (name, outcome) in category.verify_all()? {
                checked += 1;
                if let Err(err) = outcome {
                    faults += 1;
                    println!(
                        "{} {}/{}: {}",
                        style("✗").red().bold(),
                        category_name,
                        name,
                        err
                    );
                }
            }
        }

        println!();
        if faults > 0 {
            anyhow::bail!("{} of {} records failed verification", faults, checked);
        }

        println!(
            "{}",
            style(format!("✓ {} records verified", checked)).green().bold()
        );
        Ok(())
    }
}
