//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod clean;
mod list;
mod read;
mod verify;

pub use clean::Clean;
pub use list::List;
pub use read::Read;
pub use verify::Verify;

/// Human-readable byte count.
pub(crate) fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
