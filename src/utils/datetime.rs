//! Date and time utility functions
//!
//! This module provides the timestamp formats used for sequence names and
//! generated files.

use chrono::{DateTime, Local};

/// Standard date format used throughout the application
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format baked into generated sequence names
pub const SEQUENCE_NAME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Name for a newly created sequence
///
/// Unique at human timescales and sorts chronologically.
pub fn sequence_name(at: DateTime<Local>) -> String {
    format!("Sequence {}", at.format(SEQUENCE_NAME_FORMAT))
}

/// Name for a sequence created right now
pub fn sequence_name_now() -> String {
    sequence_name(Local::now())
}

/// Format current local date to YYYY-MM-DD string
pub fn format_today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}
