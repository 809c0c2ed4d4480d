//! User interface module - formatted terminal output.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_check_result, display_dry_run, display_error, display_rules, display_status,
    display_success, format_mismatches,
};
