//! Clean stored critical data
//!
//! Deletes one category directory, or the whole data directory.
//!
//! Safety: Always prompts for confirmation before deletion.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::dirs;

/// Clean stored critical data
#[derive(Parser, Debug)]
pub struct Clean {
    /// Clean only this category
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Custom data directory (defaults to CRITICAL_DATA_DIR or platform-specific location)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Skip confirmation prompt (dangerous!)
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl Clean {
    pub fn execute(self) -> Result<()> {
        let data_dir = dirs::data_dir(self.data_dir.clone());

        let target = match self.category.as_deref() {
            Some(category) => {
                dirs::select_categories(&data_dir, Some(category))?;
                (format!("Category '{}'", category), data_dir.join(category))
            }
            None if data_dir.exists() => ("All critical data".to_string(), data_dir.clone()),
            None => {
                println!(
                    "{}",
                    style("Nothing to clean - data directory doesn't exist yet").dim()
                );
                return Ok(());
            }
        };

        let (label, path) = target;
        println!("{}", style("Clean Critical Data").yellow().bold());
        println!();
        println!("The following will be deleted:");
        println!("  {} {}", style("→").cyan(), style(&label).bold());
        println!("    {}", style(path.display()).dim());
        println!();

        if !self.yes && !self.confirm()? {
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }

        print!("Deleting {}... ", label);
        io::stdout().flush()?;
        std::fs::remove_dir_all(&path)
            .with_context(|| format!("Failed to delete: {}", path.display()))?;
        println!("{}", style("✓").green());

        Ok(())
    }

    /// Prompt user for confirmation
    fn confirm(&self) -> Result<bool> {
        print!("{} ", style("Proceed? [y/N]").yellow().bold());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        Ok(input == "y" || input == "yes")
    }
}
