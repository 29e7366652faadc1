use crate::api::models::{AnalysisResult, AppSettings, EmailConnection, EmailProvider, Lead};
use crate::api::ApiClient;
use crate::constants::{
    ERROR_ANALYSIS_FAILED, ERROR_CONNECT_FAILED, ERROR_DISCONNECT_FAILED, ERROR_EXPORT_FAILED, ERROR_LEADS_FAILED,
    ERROR_PREVIEW_FAILED, ERROR_SEQUENCE_FAILED, ERROR_SETTINGS_FAILED, MAX_LEAD_COUNT, MIN_LEAD_COUNT, OAUTH_EXPIRED,
    SUCCESS_ACCOUNT_CONNECTED, SUCCESS_ACCOUNT_DISCONNECTED, SUCCESS_ANALYSIS_DONE, SUCCESS_LEADS_EXPORTED,
    SUCCESS_LEADS_LOADED, SUCCESS_PREVIEW_READY, SUCCESS_SEQUENCE_CREATED, SUCCESS_SETTINGS_SAVED,
    VALIDATION_NO_ANALYSIS,
};
use crate::config::Config;
use crate::icons::IconTheme;
use crate::logger::Logger;
use crate::ui::components::{
    DialogComponent, LeadsView, ProductView, SequenceView, SettingsView, StatusBarComponent, TabBarComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType, Tab},
    event_handler::EventType,
    task_manager::{TaskId, TaskManager},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::collections::HashMap;
use tokio::sync::mpsc;

/// Application state separate from UI concerns
///
/// The single source of truth for everything the views render. Views get
/// copies pushed into them and never read each other's widgets.
#[derive(Debug, Clone)]
pub struct AppState {
    pub active_tab: Tab,
    pub analysis: Option<AnalysisResult>,
    pub leads: Vec<Lead>,
    /// Ids of selected roster rows, in the order they were selected
    pub selected_ids: Vec<String>,
    pub previews: HashMap<String, String>,
    pub connection: EmailConnection,
    pub lead_count: u32,
    pub export_format: String,
    /// Set once a lead search has run, so an empty roster can say
    /// "no leads found" instead of showing the first-run hint
    pub has_searched: bool,

    // One in-flight guard per backend flow
    pub analyzing: bool,
    pub finding_leads: bool,
    pub previewing: bool,
    pub sending: bool,
    pub saving_schedule: bool,
    pub disconnecting: bool,
    pub exporting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        let settings = AppSettings::default();
        Self {
            active_tab: Tab::Product,
            analysis: None,
            leads: Vec::new(),
            selected_ids: Vec::new(),
            previews: HashMap::new(),
            connection: EmailConnection::Unconfigured,
            lead_count: settings.leads_per_batch,
            export_format: settings.default_format,
            has_searched: false,
            analyzing: false,
            finding_leads: false,
            previewing: false,
            sending: false,
            saving_schedule: false,
            disconnecting: false,
            exporting: false,
        }
    }
}

impl AppState {
    /// Selected leads in roster order
    pub fn selected_leads(&self) -> Vec<Lead> {
        self.leads
            .iter()
            .filter(|lead| self.selected_ids.contains(&lead.id))
            .cloned()
            .collect()
    }

    /// Label for the status bar while a backend call is in flight
    pub fn busy_label(&self) -> Option<String> {
        let label = if self.analyzing {
            "Analyzing product..."
        } else if self.finding_leads {
            "Searching for leads..."
        } else if self.previewing {
            "Personalizing preview..."
        } else if self.sending {
            "Creating sequence..."
        } else if self.saving_schedule {
            "Saving email settings..."
        } else if self.disconnecting {
            "Disconnecting account..."
        } else if self.exporting {
            "Exporting leads..."
        } else if self.connection.is_connecting() {
            "Waiting for browser sign-in..."
        } else {
            return None;
        };
        Some(label.to_string())
    }

    fn connection_label(&self) -> String {
        match &self.connection {
            EmailConnection::Connected { email, .. } => email.clone(),
            EmailConnection::Connecting(provider) => format!("connecting {}...", provider.label()),
            EmailConnection::Unconfigured => "no account".to_string(),
        }
    }
}

pub struct AppComponent {
    // Component composition
    tab_bar: TabBarComponent,
    product: ProductView,
    leads: LeadsView,
    sequence: SequenceView,
    settings: SettingsView,
    status_bar: StatusBarComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    api: ApiClient,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    // Simple UI state
    should_quit: bool,
    active_oauth_task: Option<TaskId>,
}

impl AppComponent {
    pub fn new(api: ApiClient, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            tab_bar: TabBarComponent::new(),
            product: ProductView::new(),
            leads: LeadsView::new(),
            sequence: SequenceView::new(),
            settings: SettingsView::new(),
            status_bar: StatusBarComponent::new(),
            dialog,
            state: AppState::default(),
            api,
            task_manager,
            background_action_rx,
            logger,
            should_quit: false,
            active_oauth_task: None,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply user configuration before the first frame
    pub fn apply_config(&mut self, config: &Config) {
        if let Some(tab) = Tab::from_name(&config.ui.default_tab) {
            self.state.active_tab = tab;
        }
        if let Some(theme) = IconTheme::from_name(&config.ui.icon_theme) {
            self.set_icon_theme(theme);
        }
        self.state.lead_count = config.leads.default_count.clamp(MIN_LEAD_COUNT, MAX_LEAD_COUNT);
        self.state.export_format = config.leads.export_format.clone();
        self.sync_component_data();
    }

    fn set_icon_theme(&mut self, theme: IconTheme) {
        self.product.icons.set_theme(theme);
        self.leads.icons.set_theme(theme);
        self.sequence.icons.set_theme(theme);
        self.settings.icons.set_theme(theme);
        self.status_bar.icons.set_theme(theme);
        self.dialog.icons.set_theme(theme);
    }

    /// Fetch connection status and app settings on startup
    ///
    /// Both are best-effort; the UI starts from defaults and corrects itself
    /// when the responses arrive.
    pub fn trigger_startup_checks(&mut self) {
        self.logger
            .log(format!("AppComponent: Checking email status at {}", self.api.base_url()));
        self.task_manager.spawn_status_check(self.api.clone());
        self.task_manager.spawn_app_settings_load(self.api.clone());
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        self.tab_bar.update_data(self.state.active_tab);
        self.product.update_data(self.state.analysis.clone(), self.state.analyzing);
        self.leads.update_data(
            self.state.leads.clone(),
            self.state.selected_ids.clone(),
            self.state.lead_count,
            self.state.finding_leads,
            self.state.has_searched,
        );
        self.sequence.update_data(
            self.state.selected_leads(),
            self.state.previews.clone(),
            self.state.previewing,
            self.state.sending,
        );
        self.settings
            .update_data(self.state.connection.clone(), self.state.saving_schedule);
        self.status_bar.update_data(
            self.state.active_tab,
            self.state.busy_label(),
            self.state.connection_label(),
            self.state.selected_ids.len(),
        );
    }

    fn active_view_capturing(&self) -> bool {
        match self.state.active_tab {
            Tab::Product => self.product.is_capturing_input(),
            Tab::Leads => self.leads.is_capturing_input(),
            Tab::Sequence => self.sequence.is_capturing_input(),
            Tab::Settings => self.settings.is_capturing_input(),
        }
    }

    fn active_view_key(&mut self, key: KeyEvent) -> Action {
        match self.state.active_tab {
            Tab::Product => self.product.handle_key_events(key),
            Tab::Leads => self.leads.handle_key_events(key),
            Tab::Sequence => self.sequence.handle_key_events(key),
            Tab::Settings => self.settings.handle_key_events(key),
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => {
                self.logger.log("Global key: '?' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Esc => {
                if self.dialog.is_visible() {
                    self.logger.log("Global key: Esc - closing dialog".to_string());
                    Action::HideDialog
                } else {
                    self.logger.log("Global key: Esc - quitting application".to_string());
                    Action::Quit
                }
            }
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::SwitchTab(tab) => {
                self.logger.log(format!("Tab: switching to {}", tab.title()));
                self.state.active_tab = tab;
                Action::None
            }
            Action::NextTab => {
                self.state.active_tab = self.state.active_tab.next();
                self.logger
                    .log(format!("Tab: cycled forward to {}", self.state.active_tab.title()));
                Action::None
            }
            Action::PreviousTab => {
                self.state.active_tab = self.state.active_tab.previous();
                self.logger
                    .log(format!("Tab: cycled back to {}", self.state.active_tab.title()));
                Action::None
            }

            // Product analysis
            Action::SubmitAnalysis(description) => {
                if self.state.analyzing {
                    self.logger.log("Analysis: already in progress, ignoring".to_string());
                    return Action::None;
                }
                self.logger
                    .log(format!("Analysis: submitting description ({} chars)", description.len()));
                self.state.analyzing = true;
                self.task_manager.spawn_analysis(self.api.clone(), description);
                Action::None
            }
            Action::AnalysisCompleted(result) => {
                self.logger.log(format!(
                    "{} for audience '{}'",
                    SUCCESS_ANALYSIS_DONE, result.target_audience.title
                ));
                self.state.analyzing = false;
                self.state.analysis = Some(result);
                Action::None
            }
            Action::AnalysisFailed(message) => {
                self.logger.log(format!("{ERROR_ANALYSIS_FAILED}: {message}"));
                self.state.analyzing = false;
                Action::ShowDialog(DialogType::Error(message))
            }

            // Lead roster
            Action::GenerateLeads => {
                if self.state.finding_leads {
                    self.logger.log("Leads: search already running, ignoring".to_string());
                    return Action::None;
                }
                match &self.state.analysis {
                    Some(analysis) if analysis.target_audience.is_searchable() => {
                        self.logger.log(format!(
                            "Leads: searching {} leads for '{}'",
                            self.state.lead_count, analysis.target_audience.title
                        ));
                        self.state.finding_leads = true;
                        self.state.has_searched = true;
                        self.task_manager.spawn_lead_search(
                            self.api.clone(),
                            analysis.target_audience.clone(),
                            self.state.lead_count,
                        );
                        Action::None
                    }
                    _ => {
                        self.logger.log("Leads: no audience to search for".to_string());
                        Action::ShowDialog(DialogType::Error(VALIDATION_NO_ANALYSIS.to_string()))
                    }
                }
            }
            Action::LeadsLoaded(leads) => {
                self.logger.log(format!("{}: {} leads", SUCCESS_LEADS_LOADED, leads.len()));
                self.state.finding_leads = false;
                self.state.leads = leads;
                self.state.selected_ids.clear();
                self.state.active_tab = Tab::Leads;
                Action::None
            }
            Action::LeadsFailed(message) => {
                self.logger.log(format!("{ERROR_LEADS_FAILED}: {message}"));
                self.state.finding_leads = false;
                Action::ShowDialog(DialogType::Error(message))
            }
            Action::ToggleLeadSelection(lead_id) => {
                if let Some(position) = self.state.selected_ids.iter().position(|id| *id == lead_id) {
                    self.state.selected_ids.remove(position);
                } else {
                    self.state.selected_ids.push(lead_id);
                }
                Action::None
            }
            Action::SetAllSelected(selected) => {
                if selected {
                    self.state.selected_ids = self.state.leads.iter().map(|lead| lead.id.clone()).collect();
                } else {
                    self.state.selected_ids.clear();
                }
                self.logger
                    .log(format!("Leads: selection now {} rows", self.state.selected_ids.len()));
                Action::None
            }
            Action::RemoveFromSelection(lead_id) => {
                // Local-only removal from the composer; the roster checkbox
                // clears with it but no backend call happens
                self.state.selected_ids.retain(|id| *id != lead_id);
                Action::None
            }
            Action::ComposeForLead(lead_id) => {
                if !self.state.selected_ids.contains(&lead_id) {
                    self.state.selected_ids.push(lead_id.clone());
                }
                self.logger.log(format!("Leads: composing email for lead {lead_id}"));
                self.state.active_tab = Tab::Sequence;
                Action::None
            }
            Action::SetLeadCount(count) => {
                self.state.lead_count = count.clamp(MIN_LEAD_COUNT, MAX_LEAD_COUNT);
                let settings = AppSettings {
                    leads_per_batch: self.state.lead_count,
                    default_format: self.state.export_format.clone(),
                };
                self.task_manager.spawn_app_settings_save(self.api.clone(), settings);
                Action::None
            }
            Action::ExportLeads => {
                if self.state.exporting {
                    return Action::None;
                }
                let leads = if self.state.selected_ids.is_empty() {
                    self.state.leads.clone()
                } else {
                    self.state.selected_leads()
                };
                if leads.is_empty() {
                    return Action::ShowDialog(DialogType::Error("No leads to export yet".to_string()));
                }
                self.logger.log(format!(
                    "Export: saving {} leads as {}",
                    leads.len(),
                    self.state.export_format
                ));
                self.state.exporting = true;
                self.task_manager
                    .spawn_export(self.api.clone(), leads, self.state.export_format.clone());
                Action::None
            }
            Action::ExportCompleted(message) => {
                self.logger.log(format!("{SUCCESS_LEADS_EXPORTED}: {message}"));
                self.state.exporting = false;
                Action::ShowDialog(DialogType::Info(message))
            }
            Action::ExportFailed(message) => {
                self.logger.log(format!("{ERROR_EXPORT_FAILED}: {message}"));
                self.state.exporting = false;
                Action::ShowDialog(DialogType::Error(message))
            }

            // Sequence composer
            Action::RequestPreview { template, .. } => {
                if self.state.previewing {
                    return Action::None;
                }
                let recipients = self.state.selected_leads();
                self.logger
                    .log(format!("Sequence: personalizing preview for {} leads", recipients.len()));
                self.state.previewing = true;
                self.task_manager.spawn_preview(self.api.clone(), recipients, template);
                Action::None
            }
            Action::PreviewReady(previews) => {
                self.logger
                    .log(format!("{}: {} messages", SUCCESS_PREVIEW_READY, previews.len()));
                self.state.previewing = false;
                self.state.previews = previews;
                Action::None
            }
            Action::PreviewFailed(message) => {
                self.logger.log(format!("{ERROR_PREVIEW_FAILED}: {message}"));
                self.state.previewing = false;
                Action::ShowDialog(DialogType::Error(message))
            }
            Action::SubmitSequence { subject, template } => {
                if self.state.sending {
                    return Action::None;
                }
                let recipients = self.state.selected_leads();
                self.logger
                    .log(format!("Sequence: creating sequence for {} leads", recipients.len()));
                self.state.sending = true;
                self.task_manager
                    .spawn_sequence_submit(self.api.clone(), recipients, subject, template);
                Action::None
            }
            Action::SequenceCreated(message) => {
                self.logger.log(format!("{SUCCESS_SEQUENCE_CREATED}: {message}"));
                self.state.sending = false;
                self.state.previews.clear();
                self.state.selected_ids.clear();
                self.sequence.clear_form();
                Action::ShowDialog(DialogType::Info(message))
            }
            Action::SequenceRejected => {
                self.logger
                    .log("Sequence: rejected, no email account connected".to_string());
                self.state.sending = false;
                Action::ShowDialog(DialogType::ConnectPrompt)
            }
            Action::SequenceFailed(message) => {
                self.logger.log(format!("{ERROR_SEQUENCE_FAILED}: {message}"));
                self.state.sending = false;
                Action::ShowDialog(DialogType::Error(message))
            }

            // Email account
            Action::StartOauth(provider) => {
                let url = self.api.oauth_url(provider);
                self.logger
                    .log(format!("Email: opening browser for {} sign-in", provider.label()));
                if let Err(e) = open::that(&url) {
                    self.logger.log(format!("Email: could not open browser: {e}"));
                    return Action::ShowDialog(DialogType::Error(format!("Could not open the browser: {e}")));
                }
                self.state.connection = EmailConnection::Connecting(provider);
                let task_id = self.task_manager.spawn_oauth_poll(self.api.clone());
                self.active_oauth_task = Some(task_id);
                Action::None
            }
            Action::CancelOauth => {
                self.logger.log("Email: browser sign-in cancelled".to_string());
                if let Some(task_id) = self.active_oauth_task.take() {
                    self.task_manager.abort_task(task_id);
                }
                self.state.connection = EmailConnection::Unconfigured;
                Action::None
            }
            Action::OauthExpired => {
                self.logger.log("Email: browser sign-in timed out".to_string());
                self.active_oauth_task = None;
                self.state.connection = EmailConnection::Unconfigured;
                Action::ShowDialog(DialogType::Info(OAUTH_EXPIRED.to_string()))
            }
            Action::ConnectSmtp(credentials) => {
                self.logger
                    .log(format!("Email: connecting SMTP account {}", credentials.email));
                self.state.connection = EmailConnection::Connecting(EmailProvider::Smtp);
                self.task_manager.spawn_smtp_connect(self.api.clone(), credentials);
                Action::None
            }
            Action::Connected { email, provider } => {
                self.logger.log(format!("{SUCCESS_ACCOUNT_CONNECTED}: {email} ({provider})"));
                self.state.connection = EmailConnection::Connected { email, provider };
                self.active_oauth_task = None;
                Action::ShowDialog(DialogType::Info(SUCCESS_ACCOUNT_CONNECTED.to_string()))
            }
            Action::ConnectFailed(message) => {
                self.logger.log(format!("{ERROR_CONNECT_FAILED}: {message}"));
                self.state.connection = EmailConnection::Unconfigured;
                Action::ShowDialog(DialogType::Error(message))
            }
            Action::StatusLoaded(status) => {
                let connection = EmailConnection::from_status(&status);
                if connection.is_connected() {
                    self.logger.log(format!("Email: connected as {}", status.email));
                    let finished_oauth = self.active_oauth_task.take();
                    if let Some(task_id) = finished_oauth {
                        self.task_manager.abort_task(task_id);
                    }
                    self.state.connection = connection;
                    if finished_oauth.is_some() {
                        return Action::ShowDialog(DialogType::Info(SUCCESS_ACCOUNT_CONNECTED.to_string()));
                    }
                } else if !self.state.connection.is_connecting() {
                    self.logger.log("Email: no account connected".to_string());
                    self.state.connection = connection;
                }
                Action::None
            }
            Action::StatusFailed(message) => {
                // Startup check failing is not fatal; defaults stay in effect
                self.logger.log(format!("Email: status check failed: {message}"));
                Action::None
            }
            Action::SaveSchedule(settings) => {
                if self.state.saving_schedule {
                    return Action::None;
                }
                self.logger.log(format!(
                    "Email: saving schedule (send at {}, {})",
                    settings.send_time, settings.timezone
                ));
                self.state.saving_schedule = true;
                self.task_manager.spawn_schedule_save(self.api.clone(), settings);
                Action::None
            }
            Action::ScheduleSaved => {
                self.logger.log(SUCCESS_SETTINGS_SAVED.to_string());
                self.state.saving_schedule = false;
                Action::ShowDialog(DialogType::Info(SUCCESS_SETTINGS_SAVED.to_string()))
            }
            Action::ScheduleSaveFailed(message) => {
                self.logger.log(format!("{ERROR_SETTINGS_FAILED}: {message}"));
                self.state.saving_schedule = false;
                Action::ShowDialog(DialogType::Error(message))
            }
            Action::ConfirmDisconnect => {
                if self.state.disconnecting {
                    return Action::None;
                }
                self.logger.log("Email: disconnect confirmed".to_string());
                self.state.disconnecting = true;
                self.task_manager.spawn_disconnect(self.api.clone());
                Action::None
            }
            Action::Disconnected => {
                self.logger.log(SUCCESS_ACCOUNT_DISCONNECTED.to_string());
                self.state.disconnecting = false;
                self.state.connection = EmailConnection::Unconfigured;
                Action::ShowDialog(DialogType::Info(SUCCESS_ACCOUNT_DISCONNECTED.to_string()))
            }
            Action::DisconnectFailed(message) => {
                self.logger.log(format!("{ERROR_DISCONNECT_FAILED}: {message}"));
                self.state.disconnecting = false;
                Action::ShowDialog(DialogType::Error(message))
            }

            // App settings bootstrap
            Action::AppSettingsLoaded(settings) => {
                self.logger.log(format!(
                    "Settings: loaded (batch {}, format {})",
                    settings.leads_per_batch, settings.default_format
                ));
                self.state.lead_count = settings.leads_per_batch.clamp(MIN_LEAD_COUNT, MAX_LEAD_COUNT);
                self.state.export_format = settings.default_format;
                Action::None
            }

            // Pass through other actions
            _ => action,
        }
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        // Process all available background actions
        while let Ok(action) = self.background_action_rx.try_recv() {
            self.logger.log(format!("Background: received action {action:?}"));
            actions.push(action);
        }

        // Clean up finished tasks
        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        if !completed_tasks.is_empty() {
            self.logger.log(format!(
                "Background: cleaned up {} finished tasks",
                completed_tasks.len()
            ));
        }

        actions
    }

    /// Run one action through the component chain and app-level handling
    ///
    /// Completion dialogs raised by app handling are routed back to the
    /// dialog host before data is pushed out to the views.
    async fn run_action(&mut self, action: Action) {
        let action = self.dialog.update(action);
        let action = self.product.update(action);
        let action = self.leads.update(action);
        let action = self.sequence.update(action);
        let action = self.settings.update(action);

        let followup = self.handle_app_action(action).await;
        if !matches!(followup, Action::None) {
            self.dialog.update(followup);
        }

        self.sync_component_data();
    }

    /// Handle an action reported by a background task
    pub async fn handle_background_action(&mut self, action: Action) -> anyhow::Result<()> {
        self.run_action(action).await;
        Ok(())
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                    Action::Quit
                } else if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else {
                    // Capture state must be read before the key reaches the
                    // view: a key that ends editing would otherwise fall
                    // through to tab switching or a global shortcut
                    let capturing = self.active_view_capturing();
                    let view_action = self.active_view_key(key);

                    if capturing || !matches!(view_action, Action::None) {
                        view_action
                    } else {
                        let tab_action = self.tab_bar.handle_key_events(key);

                        if !matches!(tab_action, Action::None) {
                            tab_action
                        } else {
                            // Finally try global keys
                            self.handle_global_key(key)
                        }
                    }
                }
            }
            EventType::Resize(_, _) => Action::None,
            EventType::Tick => Action::None,
            EventType::Other => Action::None,
        };

        self.run_action(action).await;
        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        let action = self.product.update(action);
        let action = self.leads.update(action);
        let action = self.sequence.update(action);
        self.settings.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);

        self.tab_bar.render(f, chunks[0]);
        match self.state.active_tab {
            Tab::Product => self.product.render(f, chunks[1]),
            Tab::Leads => self.leads.render(f, chunks[1]),
            Tab::Sequence => self.sequence.render(f, chunks[1]),
            Tab::Settings => self.settings.render(f, chunks[1]),
        }
        self.status_bar.render(f, chunks[2]);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{EmailStatus, TargetAudience};
    use crate::constants::DEFAULT_BASE_URL;

    fn test_app() -> AppComponent {
        let api = ApiClient::new(DEFAULT_BASE_URL).expect("client");
        AppComponent::new(api, Logger::new())
    }

    fn lead(id: &str, name: &str) -> Lead {
        Lead {
            id: id.to_string(),
            name: name.to_string(),
            company: "Acme".to_string(),
            title: "CTO".to_string(),
            email: format!("{id}@acme.test"),
            insight: "insight".to_string(),
            ..Lead::default()
        }
    }

    fn analysis() -> AnalysisResult {
        AnalysisResult {
            target_audience: TargetAudience {
                title: "Founders".to_string(),
                description: "Early-stage SaaS founders".to_string(),
                ..TargetAudience::default()
            },
            ..AnalysisResult::default()
        }
    }

    #[tokio::test]
    async fn starts_on_product_tab() {
        let app = test_app();
        assert_eq!(app.state().active_tab, Tab::Product);
    }

    #[tokio::test]
    async fn tab_switching_is_exclusive_and_cycles() {
        let mut app = test_app();

        app.handle_app_action(Action::SwitchTab(Tab::Settings)).await;
        assert_eq!(app.state().active_tab, Tab::Settings);

        app.handle_app_action(Action::NextTab).await;
        assert_eq!(app.state().active_tab, Tab::Product);

        app.handle_app_action(Action::PreviousTab).await;
        assert_eq!(app.state().active_tab, Tab::Settings);
    }

    #[tokio::test]
    async fn generate_leads_requires_an_analysis() {
        let mut app = test_app();

        let result = app.handle_app_action(Action::GenerateLeads).await;
        assert!(matches!(result, Action::ShowDialog(DialogType::Error(_))));
        assert!(!app.state().finding_leads);
        assert_eq!(app.active_task_count(), 0);
    }

    #[tokio::test]
    async fn generate_leads_spawns_search_after_analysis() {
        let mut app = test_app();
        app.handle_app_action(Action::AnalysisCompleted(analysis())).await;

        let result = app.handle_app_action(Action::GenerateLeads).await;
        assert!(matches!(result, Action::None));
        assert!(app.state().finding_leads);
        assert!(app.state().has_searched);
        assert_eq!(app.active_task_count(), 1);
    }

    #[tokio::test]
    async fn loaded_leads_switch_to_roster_and_reset_selection() {
        let mut app = test_app();
        app.state.selected_ids.push("stale".to_string());

        app.handle_app_action(Action::LeadsLoaded(vec![lead("1", "Ada"), lead("2", "Grace")]))
            .await;

        assert_eq!(app.state().active_tab, Tab::Leads);
        assert_eq!(app.state().leads.len(), 2);
        assert!(app.state().selected_ids.is_empty());
        assert!(!app.state().finding_leads);
    }

    #[tokio::test]
    async fn selection_toggles_and_selects_all() {
        let mut app = test_app();
        app.handle_app_action(Action::LeadsLoaded(vec![lead("1", "Ada"), lead("2", "Grace")]))
            .await;

        app.handle_app_action(Action::ToggleLeadSelection("2".to_string())).await;
        assert_eq!(app.state().selected_ids, vec!["2".to_string()]);

        app.handle_app_action(Action::ToggleLeadSelection("2".to_string())).await;
        assert!(app.state().selected_ids.is_empty());

        app.handle_app_action(Action::SetAllSelected(true)).await;
        assert_eq!(app.state().selected_ids.len(), 2);

        app.handle_app_action(Action::SetAllSelected(false)).await;
        assert!(app.state().selected_ids.is_empty());
    }

    #[tokio::test]
    async fn selected_leads_follow_roster_order() {
        let mut app = test_app();
        app.handle_app_action(Action::LeadsLoaded(vec![
            lead("1", "Ada"),
            lead("2", "Grace"),
            lead("3", "Edsger"),
        ]))
        .await;

        // Select out of order; recipients still come back in roster order
        app.handle_app_action(Action::ToggleLeadSelection("3".to_string())).await;
        app.handle_app_action(Action::ToggleLeadSelection("1".to_string())).await;

        let names: Vec<String> = app.state().selected_leads().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Ada".to_string(), "Edsger".to_string()]);
    }

    #[tokio::test]
    async fn compose_for_lead_selects_and_switches_to_sequence() {
        let mut app = test_app();
        app.handle_app_action(Action::LeadsLoaded(vec![lead("1", "Ada")])).await;

        app.handle_app_action(Action::ComposeForLead("1".to_string())).await;

        assert_eq!(app.state().active_tab, Tab::Sequence);
        assert_eq!(app.state().selected_ids, vec!["1".to_string()]);

        // Repeating the action must not duplicate the selection
        app.handle_app_action(Action::ComposeForLead("1".to_string())).await;
        assert_eq!(app.state().selected_ids.len(), 1);
    }

    #[tokio::test]
    async fn removal_from_composer_is_local_only() {
        let mut app = test_app();
        app.handle_app_action(Action::LeadsLoaded(vec![lead("1", "Ada"), lead("2", "Grace")]))
            .await;
        app.handle_app_action(Action::SetAllSelected(true)).await;

        app.handle_app_action(Action::RemoveFromSelection("1".to_string())).await;

        assert_eq!(app.state().selected_ids, vec!["2".to_string()]);
        assert_eq!(app.state().leads.len(), 2);
        assert_eq!(app.active_task_count(), 0);
    }

    #[tokio::test]
    async fn sequence_creation_clears_the_composer() {
        let mut app = test_app();
        app.state.sending = true;
        app.state.selected_ids.push("1".to_string());
        app.state
            .previews
            .insert("1".to_string(), "Hello Ada".to_string());

        let result = app
            .handle_app_action(Action::SequenceCreated("Sequence created with 2 leads".to_string()))
            .await;

        assert!(matches!(result, Action::ShowDialog(DialogType::Info(_))));
        assert!(!app.state().sending);
        assert!(app.state().previews.is_empty());
        assert!(app.state().selected_ids.is_empty());
    }

    #[tokio::test]
    async fn rejected_sequence_prompts_for_connection() {
        let mut app = test_app();
        app.state.sending = true;

        let result = app.handle_app_action(Action::SequenceRejected).await;

        assert!(matches!(result, Action::ShowDialog(DialogType::ConnectPrompt)));
        assert!(!app.state().sending);
    }

    #[tokio::test]
    async fn analysis_failure_restores_the_trigger() {
        let mut app = test_app();
        app.state.analyzing = true;

        let result = app.handle_app_action(Action::AnalysisFailed("boom".to_string())).await;

        assert!(matches!(result, Action::ShowDialog(DialogType::Error(_))));
        assert!(!app.state().analyzing);
    }

    #[tokio::test]
    async fn status_payload_drives_connection_state() {
        let mut app = test_app();

        let status = EmailStatus {
            connected: true,
            email: "ada@acme.test".to_string(),
            provider: "gmail".to_string(),
            ..EmailStatus::default()
        };
        app.handle_app_action(Action::StatusLoaded(status)).await;
        assert!(app.state().connection.is_connected());

        app.handle_app_action(Action::Disconnected).await;
        assert!(matches!(app.state().connection, EmailConnection::Unconfigured));
    }

    #[tokio::test]
    async fn oauth_timeout_returns_to_unconfigured() {
        let mut app = test_app();
        app.state.connection = EmailConnection::Connecting(EmailProvider::Gmail);

        let result = app.handle_app_action(Action::OauthExpired).await;

        assert!(matches!(result, Action::ShowDialog(DialogType::Info(_))));
        assert!(matches!(app.state().connection, EmailConnection::Unconfigured));
    }

    #[tokio::test]
    async fn lead_count_is_clamped_and_persisted() {
        let mut app = test_app();

        app.handle_app_action(Action::SetLeadCount(500)).await;

        assert_eq!(app.state().lead_count, MAX_LEAD_COUNT);
        assert_eq!(app.active_task_count(), 1);
    }

    #[tokio::test]
    async fn export_without_leads_is_rejected() {
        let mut app = test_app();

        let result = app.handle_app_action(Action::ExportLeads).await;

        assert!(matches!(result, Action::ShowDialog(DialogType::Error(_))));
        assert!(!app.state().exporting);
    }

    #[test]
    fn busy_label_prefers_the_active_flow() {
        let mut state = AppState::default();
        assert!(state.busy_label().is_none());

        state.finding_leads = true;
        assert_eq!(state.busy_label().as_deref(), Some("Searching for leads..."));

        state.analyzing = true;
        assert_eq!(state.busy_label().as_deref(), Some("Analyzing product..."));
    }
}
