//! Wire models for the lead agent backend
//!
//! The backend is permissive about JSON shapes (numeric ids, camelCase
//! settings keys, bare objects where lists are expected), so the models here
//! lean on `#[serde(default)]` and a few coercion helpers instead of strict
//! deserialization.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

use crate::constants::{DEFAULT_FOLLOWUP_COUNT, DEFAULT_FOLLOWUP_DELAY, DEFAULT_SEND_HOUR, DEFAULT_TIMEZONE};

/// A prospective contact returned by lead discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Lead {
    /// Stable key used for selection and personalization lookups
    pub id: String,
    pub name: String,
    pub company: String,
    pub title: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub insight: String,
}

/// Structured audience description produced by product analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TargetAudience {
    pub title: String,
    pub description: String,
    pub industry: String,
    pub company_size: String,
    pub role: String,
    pub pain_point: String,
}

impl TargetAudience {
    /// Whether the audience is filled in enough to drive a lead search
    pub fn is_searchable(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }
}

/// One recommended market segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Market {
    pub name: String,
    pub description: String,
}

/// One recommended geography (newer analysis variant)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IdealLocation {
    pub country_region: String,
    pub reason: String,
}

/// One suggested outreach channel or tactic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutreachStrategy {
    pub name: String,
    pub description: String,
}

/// Full product analysis response
///
/// Older backend builds return `search_keywords` instead of
/// `ideal_locations`; both are optional and the renderer falls back from
/// locations to keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisResult {
    pub target_audience: TargetAudience,
    pub markets: Vec<Market>,
    pub ideal_locations: Vec<IdealLocation>,
    pub outreach_strategies: Vec<OutreachStrategy>,
    pub search_keywords: Vec<String>,
}

/// Email connection status from `GET /api/email/status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EmailStatus {
    pub connected: bool,
    pub email: String,
    pub provider: String,
    pub settings: ScheduleSettings,
}

/// Sending schedule attached to a connected email account
///
/// The backend speaks camelCase here and is loose about number-vs-string for
/// the hour and follow-up fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduleSettings {
    /// Hour of day to send, as the backend stores it ("9" = 9:00)
    #[serde(deserialize_with = "de_loose_string")]
    pub send_time: String,
    pub timezone: String,
    pub auto_followup: bool,
    #[serde(deserialize_with = "de_followup_delay")]
    pub followup_delay: u32,
    #[serde(deserialize_with = "de_followup_count")]
    pub followup_count: u32,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            send_time: DEFAULT_SEND_HOUR.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            auto_followup: false,
            followup_delay: DEFAULT_FOLLOWUP_DELAY,
            followup_count: DEFAULT_FOLLOWUP_COUNT,
        }
    }
}

/// Credentials for `POST /api/email/smtp`
#[derive(Clone, Serialize)]
pub struct SmtpCredentials {
    pub email: String,
    pub password: String,
    pub server: String,
    pub port: u16,
    pub use_ssl: bool,
}

// Actions carrying credentials get logged, so keep the password out of Debug
impl std::fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("use_ssl", &self.use_ssl)
            .finish()
    }
}

/// Response from a successful connection attempt
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ConnectResponse {
    pub success: bool,
    pub email: String,
    pub provider: String,
}

/// Body for `POST /api/email/sequence`
#[derive(Debug, Clone, Serialize)]
pub struct SequenceRequest {
    pub name: String,
    pub subject: String,
    pub template: String,
    pub leads: Vec<Lead>,
}

/// Response from sequence creation
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SequenceResponse {
    pub success: bool,
    #[serde(deserialize_with = "de_loose_opt_string")]
    pub sequence_id: Option<String>,
    pub message: Option<String>,
}

/// Response from `POST /api/save-leads`
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SaveLeadsResponse {
    pub success: bool,
    pub path: Option<String>,
    pub message: Option<String>,
}

/// Application-level settings from `GET /api/settings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub leads_per_batch: u32,
    pub default_format: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            leads_per_batch: 10,
            default_format: "csv".to_string(),
        }
    }
}

/// Email providers offered by the connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    Gmail,
    Outlook,
    Smtp,
}

impl EmailProvider {
    pub const ALL: [EmailProvider; 3] = [EmailProvider::Gmail, EmailProvider::Outlook, EmailProvider::Smtp];

    pub fn label(&self) -> &'static str {
        match self {
            EmailProvider::Gmail => "Gmail",
            EmailProvider::Outlook => "Outlook",
            EmailProvider::Smtp => "Custom SMTP",
        }
    }

    /// Identifier used in API paths and status payloads
    pub fn slug(&self) -> &'static str {
        match self {
            EmailProvider::Gmail => "gmail",
            EmailProvider::Outlook => "outlook",
            EmailProvider::Smtp => "smtp",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.slug() == slug)
    }

    /// Whether connecting goes through a browser OAuth flow
    pub fn uses_oauth(&self) -> bool {
        !matches!(self, EmailProvider::Smtp)
    }
}

/// Client-side account state, driven by [`EmailStatus`] payloads plus the
/// transitions the connector performs itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EmailConnection {
    #[default]
    Unconfigured,
    /// Waiting on the browser OAuth flow or an SMTP handshake.
    Connecting(EmailProvider),
    Connected {
        email: String,
        provider: String,
    },
}

impl EmailConnection {
    /// Map a backend status payload onto the state machine.
    pub fn from_status(status: &EmailStatus) -> Self {
        if status.connected {
            EmailConnection::Connected {
                email: status.email.clone(),
                provider: status.provider.clone(),
            }
        } else {
            EmailConnection::Unconfigured
        }
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self, EmailConnection::Connected { .. })
    }

    #[must_use]
    pub fn is_connecting(&self) -> bool {
        matches!(self, EmailConnection::Connecting(_))
    }
}

/// Coerce an arbitrary JSON response into a lead list.
///
/// Arrays map row-per-lead, a bare object becomes a one-element list, and
/// anything else becomes an empty list. Numeric ids are stringified and a
/// missing id gets a fresh UUID so selection stays keyed.
pub fn coerce_leads(value: Value) -> Vec<Lead> {
    match value {
        Value::Array(items) => items.iter().map(lead_from_value).collect(),
        obj @ Value::Object(_) => vec![lead_from_value(&obj)],
        _ => Vec::new(),
    }
}

fn lead_from_value(value: &Value) -> Lead {
    let field = |key: &str| loose_string(value.get(key)).unwrap_or_default();
    let opt_field = |key: &str| loose_string(value.get(key)).filter(|s| !s.is_empty());
    Lead {
        id: loose_string(value.get("id")).unwrap_or_else(|| Uuid::new_v4().to_string()),
        name: field("name"),
        company: field("company"),
        title: field("title"),
        email: field("email"),
        phone: opt_field("phone"),
        linkedin: opt_field("linkedin"),
        source: opt_field("source"),
        insight: field("insight"),
    }
}

/// Coerce a personalization response into `lead id -> message`.
///
/// Values are usually plain strings, but richer backend builds return
/// `{subject, message, lead}` objects; anything without a usable message is
/// dropped.
pub fn coerce_previews(value: Value) -> HashMap<String, String> {
    let Value::Object(entries) = value else {
        return HashMap::new();
    };
    entries
        .into_iter()
        .filter_map(|(id, v)| match v {
            Value::String(message) => Some((id, message)),
            Value::Object(ref obj) => loose_string(obj.get("message")).map(|message| (id, message)),
            _ => None,
        })
        .collect()
}

fn loose_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn loose_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().map(|n| n as u32),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn de_loose_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(loose_string(Some(&value)).unwrap_or_default())
}

fn de_loose_opt_string<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(loose_string(Some(&value)))
}

fn de_followup_delay<'de, D: Deserializer<'de>>(de: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(loose_u32(&value).unwrap_or(DEFAULT_FOLLOWUP_DELAY))
}

fn de_followup_count<'de, D: Deserializer<'de>>(de: D) -> Result<u32, D::Error> {
    let value = Value::deserialize(de)?;
    Ok(loose_u32(&value).unwrap_or(DEFAULT_FOLLOWUP_COUNT))
}
