//! Typed HTTP client for the lead agent backend
//!
//! One method per endpoint, all returning `Result<_, ApiError>`. Requests
//! carry no client-side timeout and are never retried; callers decide how to
//! surface failures.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use thiserror::Error;

use super::models::{
    coerce_leads, coerce_previews, AnalysisResult, AppSettings, ConnectResponse, EmailProvider, EmailStatus, Lead,
    SaveLeadsResponse, ScheduleSettings, SequenceRequest, SequenceResponse, SmtpCredentials, TargetAudience,
};
use crate::constants::USER_AGENT;

/// Failure modes of a backend call
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, broken pipe)
    #[error("cannot reach backend: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-success status
    #[error("{message}")]
    Backend { status: StatusCode, message: String },
}

/// Client for the lead agent HTTP API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Analyze a product description into a target audience and markets
    pub async fn analyze_product(&self, description: &str) -> Result<AnalysisResult, ApiError> {
        self.post_json("/api/analyze-product", &json!({ "description": description })).await
    }

    /// Find leads matching an audience; the response list is coerced, never trusted
    pub async fn find_leads(&self, audience: &TargetAudience, count: u32) -> Result<Vec<Lead>, ApiError> {
        let body = json!({ "target_audience": audience, "count": count });
        let value: Value = self.post_json("/api/find-leads", &body).await?;
        Ok(coerce_leads(value))
    }

    /// Render the template for each lead, returning `lead id -> message`
    pub async fn personalize_messages(&self, leads: &[Lead], template: &str) -> Result<HashMap<String, String>, ApiError> {
        let body = json!({ "leads": leads, "template": template });
        let value: Value = self.post_json("/api/personalize-messages", &body).await?;
        Ok(coerce_previews(value))
    }

    /// Export leads on the backend in the given format ("csv" or "json")
    pub async fn save_leads(&self, leads: &[Lead], format: &str) -> Result<SaveLeadsResponse, ApiError> {
        self.post_json("/api/save-leads", &json!({ "leads": leads, "format": format })).await
    }

    pub async fn app_settings(&self) -> Result<AppSettings, ApiError> {
        self.get_json("/api/settings").await
    }

    pub async fn update_app_settings(&self, settings: &AppSettings) -> Result<(), ApiError> {
        let _: Value = self.post_json("/api/settings", settings).await?;
        Ok(())
    }

    /// Current email connection state, including persisted schedule settings
    pub async fn email_status(&self) -> Result<EmailStatus, ApiError> {
        self.get_json("/api/email/status").await
    }

    pub async fn update_email_settings(&self, settings: &ScheduleSettings) -> Result<(), ApiError> {
        let _: Value = self.post_json("/api/email/settings", settings).await?;
        Ok(())
    }

    /// Connect an account with raw SMTP credentials
    pub async fn connect_smtp(&self, credentials: &SmtpCredentials) -> Result<ConnectResponse, ApiError> {
        self.post_json("/api/email/smtp", credentials).await
    }

    /// Create an outreach sequence; the backend rejects this when no account
    /// is connected
    pub async fn create_sequence(&self, request: &SequenceRequest) -> Result<SequenceResponse, ApiError> {
        self.post_json("/api/email/sequence", request).await
    }

    pub async fn disconnect_email(&self) -> Result<(), ApiError> {
        let url = format!("{}/api/email/disconnect", self.base_url);
        let response = self.http.post(url).send().await?;
        let _: Value = Self::decode(response).await?;
        Ok(())
    }

    /// Browser URL that starts the OAuth flow for a provider
    pub fn oauth_url(&self, provider: EmailProvider) -> String {
        format!("{}/api/email/oauth/{}", self.base_url, provider.slug())
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.http.get(format!("{}{path}", self.base_url)).send().await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        let response = self.http.post(format!("{}{path}", self.base_url)).json(body).send().await?;
        Self::decode(response).await
    }

    /// Decode a success body, or extract the server's `error` field (falling
    /// back to the bare status) from a failure
    async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<R>().await?);
        }
        let message = response
            .json::<Value>()
            .await
            .ok()
            .as_ref()
            .and_then(|body| body.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("backend returned {status}"));
        Err(ApiError::Backend { status, message })
    }
}
