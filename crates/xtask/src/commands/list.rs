//! List stored critical data
//!
//! Prints every category under the data directory with its item names and
//! stored sizes.

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use super::format_bytes;
use crate::dirs;

/// List categories and stored items
#[derive(Parser, Debug)]
pub struct List {
    /// Only list this category (e.g., shell, payvar)
    #[arg(short, long, value_name = "CATEGORY")]
    category: Option<String>,

    /// Custom data directory (defaults to CRITICAL_DATA_DIR or platform-specific location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl List {
    pub fn execute(self) -> Result<()> {
        let data_dir = dirs::data_dir(self.data_dir);
        let categories = dirs::select_categories(&data_dir, self.category.as_deref())?;

        println!("{} {}", style("Data Dir:").bold().cyan(), data_dir.display());
        println!();

        if categories.is_empty() {
            println!("{}", style("No categories stored yet").dim());
            return Ok(());
        }

        for category_name in categories {
            let category = dirs::open_category(&data_dir, &category_name)?;
            let names = category.names()?;
            println!(
                "{} {}",
                style(&category_name).bold().yellow(),
                style(format!("({} items)", names.len())).dim()
            );

            for name in names {
                let size = match category.load_record(&name) {
                    Ok(Some(record)) => format_bytes(record.bytes.len()),
                    Ok(None) => "removed".to_string(),
                    Err(err) => format!("{} {}", style("unreadable:").red(), err),
                };
                println!("  {} {} {}", style("→").cyan(), name, style(size).dim());
            }
            println!();
        }

        Ok(())
    }
}
