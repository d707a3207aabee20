//! Command-line argument parsing and handling.

pub mod definition;
pub mod list;
pub mod reader;
pub mod utils;

// Re-export commonly used items
pub use definition::{Args, apply_overrides};
pub use list::{run_export, run_list};
pub use reader::run_reader_command;
pub use utils::determine_log_level;
