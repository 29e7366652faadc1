use crate::api::models::{
    AnalysisResult, AppSettings, EmailProvider, EmailStatus, Lead, ScheduleSettings, SmtpCredentials,
};
use std::collections::HashMap;

/// The four top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Product, // Product description and analysis results
    Leads,    // Lead roster with selection
    Sequence, // Outreach sequence composer
    Settings, // Email account and schedule settings
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Product, Tab::Leads, Tab::Sequence, Tab::Settings];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Product => "Product",
            Tab::Leads => "Leads",
            Tab::Sequence => "Sequence",
            Tab::Settings => "Settings",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    /// Parse a tab name as it appears in the config file
    pub fn from_name(name: &str) -> Option<Tab> {
        match name {
            "product" => Some(Tab::Product),
            "leads" => Some(Tab::Leads),
            "sequence" => Some(Tab::Sequence),
            "settings" => Some(Tab::Settings),
            _ => None,
        }
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    SwitchTab(Tab),
    NextTab,
    PreviousTab,

    // Product analysis
    SubmitAnalysis(String),
    AnalysisCompleted(AnalysisResult),
    AnalysisFailed(String),

    // Lead roster
    GenerateLeads,
    LeadsLoaded(Vec<Lead>),
    LeadsFailed(String),
    ToggleLeadSelection(String),
    SetAllSelected(bool),
    RemoveFromSelection(String),
    ComposeForLead(String),
    SetLeadCount(u32),
    ExportLeads,
    ExportCompleted(String),
    ExportFailed(String),

    // Sequence composer
    RequestPreview {
        subject: String,
        template: String,
    },
    PreviewReady(HashMap<String, String>),
    PreviewFailed(String),
    SubmitSequence {
        subject: String,
        template: String,
    },
    SequenceCreated(String),
    /// The connection pre-check found no connected account
    SequenceRejected,
    SequenceFailed(String),

    // Email account
    StartOauth(EmailProvider),
    CancelOauth,
    OauthExpired,
    ConnectSmtp(SmtpCredentials),
    Connected {
        email: String,
        provider: String,
    },
    ConnectFailed(String),
    StatusLoaded(EmailStatus),
    StatusFailed(String),
    SaveSchedule(ScheduleSettings),
    ScheduleSaved,
    ScheduleSaveFailed(String),
    ConfirmDisconnect,
    Disconnected,
    DisconnectFailed(String),

    // App settings bootstrap
    AppSettingsLoaded(AppSettings),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    LeadDetails(Lead),
    DisconnectConfirmation,
    /// Raised when a sequence is submitted without a connected account;
    /// confirming jumps to the Settings tab
    ConnectPrompt,
    Error(String),
    Info(String),
    Help,
    Logs,
}
