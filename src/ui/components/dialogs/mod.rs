//! Dialog rendering helpers, grouped by subject

pub mod common;
pub mod lead_dialogs;
pub mod system_dialogs;
