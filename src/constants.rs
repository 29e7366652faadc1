//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// HTTP
pub const USER_AGENT: &str = "prospector/0.1";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

// Success Messages
pub const SUCCESS_ANALYSIS_DONE: &str = "✅ Product analysis complete";
pub const SUCCESS_LEADS_LOADED: &str = "✅ Leads loaded";
pub const SUCCESS_LEADS_EXPORTED: &str = "✅ Leads exported";
pub const SUCCESS_PREVIEW_READY: &str = "✅ Message preview ready";
pub const SUCCESS_SEQUENCE_CREATED: &str = "✅ Sequence created";
pub const SUCCESS_ACCOUNT_CONNECTED: &str = "✅ Email account connected";
pub const SUCCESS_ACCOUNT_DISCONNECTED: &str = "✅ Email account disconnected";
pub const SUCCESS_SETTINGS_SAVED: &str = "✅ Email settings saved";

// Error Messages
pub const ERROR_ANALYSIS_FAILED: &str = "❌ Product analysis failed";
pub const ERROR_LEADS_FAILED: &str = "❌ Lead search failed";
pub const ERROR_EXPORT_FAILED: &str = "❌ Lead export failed";
pub const ERROR_PREVIEW_FAILED: &str = "❌ Message preview failed";
pub const ERROR_SEQUENCE_FAILED: &str = "❌ Sequence creation failed";
pub const ERROR_CONNECT_FAILED: &str = "❌ Email connection failed";
pub const ERROR_DISCONNECT_FAILED: &str = "❌ Disconnect failed";
pub const ERROR_SETTINGS_FAILED: &str = "❌ Saving email settings failed";

// Validation Messages
pub const VALIDATION_EMPTY_DESCRIPTION: &str = "Please enter a product description first";
pub const VALIDATION_NO_ANALYSIS: &str = "Analyze your product before generating leads";
pub const VALIDATION_SEQUENCE_INCOMPLETE: &str = "A subject, a template and at least one selected lead are required";
pub const VALIDATION_SMTP_INCOMPLETE: &str = "All SMTP fields are required";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const NO_LEADS_FOUND: &str = "No leads found";
pub const NOT_CONNECTED_PROMPT: &str =
    "No email account is connected. Open the Settings tab and connect one before sending a sequence.";
pub const DISCONNECT_CONFIRM: &str = "Disconnect this email account?";
pub const OAUTH_WAITING: &str = "Waiting for the browser sign-in to finish...";
pub const OAUTH_EXPIRED: &str = "The sign-in attempt timed out. Pick a provider and try again.";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Debug Logs - Press 'Esc', 'G' or 'q' to close";

// Analysis rendering caps
/// Markets shown in the results pane
pub const MAX_MARKETS_SHOWN: usize = 3;
/// Ideal locations shown in the results pane
pub const MAX_LOCATIONS_SHOWN: usize = 10;

// Lead roster bounds
pub const MIN_LEAD_COUNT: u32 = 1;
pub const MAX_LEAD_COUNT: u32 = 50;
pub const DEFAULT_LEAD_COUNT: u32 = 10;

// Schedule defaults mirrored from the backend
pub const DEFAULT_SEND_HOUR: &str = "9";
pub const DEFAULT_TIMEZONE: &str = "America/New_York";
pub const DEFAULT_FOLLOWUP_DELAY: u32 = 3;
pub const DEFAULT_FOLLOWUP_COUNT: u32 = 1;

/// Timezones offered by the schedule form
pub const TIMEZONES: &[&str] = &[
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "Europe/London",
    "Europe/Paris",
    "UTC",
];

// OAuth status polling
/// Seconds between status checks while a browser sign-in is pending
pub const OAUTH_POLL_INTERVAL_SECS: u64 = 2;
/// Checks before an unfinished browser sign-in is abandoned
pub const OAUTH_POLL_ATTEMPTS: u32 = 60;

// UI Layout Constants
/// Tab bar height in rows
pub const TAB_BAR_HEIGHT: u16 = 1;
/// Status bar height in rows
pub const STATUS_BAR_HEIGHT: u16 = 1;
