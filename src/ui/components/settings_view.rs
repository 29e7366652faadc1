//! Settings tab: email account connector and sending schedule.

use crate::api::models::{EmailConnection, EmailProvider, ScheduleSettings, SmtpCredentials};
use crate::constants::{OAUTH_WAITING, TIMEZONES, VALIDATION_SMTP_INCOMPLETE};
use crate::icons::IconService;
use crate::ui::components::input::InputField;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// One navigable row of the settings form. Which rows exist depends on
/// the connection state and the chosen provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsRow {
    Provider,
    SmtpEmail,
    SmtpPassword,
    SmtpServer,
    SmtpPort,
    SmtpSsl,
    Connect,
    Disconnect,
    SendHour,
    Timezone,
    AutoFollowup,
    FollowupDelay,
    FollowupCount,
    SaveSchedule,
}

/// Email account and schedule view.
///
/// # Features
/// - Provider selection (Gmail, Outlook, custom SMTP)
/// - Browser OAuth hand-off with cancellable waiting state
/// - SMTP credential form with all-fields validation
/// - Schedule editing, revealed only while an account is connected
/// - Confirmed disconnect that resets the form to Gmail
///
/// The connection state machine lives in the app state and is pushed in;
/// the provider choice, credential fields and the schedule working copy
/// are form state owned here. The schedule copy is refreshed whenever a
/// status payload arrives.
pub struct SettingsView {
    pub connection: EmailConnection,
    pub provider: EmailProvider,
    pub smtp_email: InputField,
    pub smtp_password: InputField,
    pub smtp_server: InputField,
    pub smtp_port: InputField,
    pub smtp_ssl: bool,
    pub schedule: ScheduleSettings,
    pub saving_schedule: bool,
    pub cursor: usize,
    pub editing: bool,
    pub icons: IconService,
}

impl Default for SettingsView {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsView {
    pub fn new() -> Self {
        Self {
            connection: EmailConnection::Unconfigured,
            provider: EmailProvider::Gmail,
            smtp_email: InputField::new(),
            smtp_password: InputField::new(),
            smtp_server: InputField::new(),
            smtp_port: InputField::with_value("587"),
            smtp_ssl: false,
            schedule: ScheduleSettings::default(),
            saving_schedule: false,
            cursor: 0,
            editing: false,
            icons: IconService::default(),
        }
    }

    pub fn update_data(&mut self, connection: EmailConnection, saving_schedule: bool) {
        self.connection = connection;
        self.saving_schedule = saving_schedule;
        self.clamp_cursor();
    }

    fn rows(&self) -> Vec<SettingsRow> {
        let mut rows = Vec::new();
        match &self.connection {
            EmailConnection::Connecting(_) => {}
            EmailConnection::Unconfigured => {
                rows.push(SettingsRow::Provider);
                if self.provider == EmailProvider::Smtp {
                    rows.extend([
                        SettingsRow::SmtpEmail,
                        SettingsRow::SmtpPassword,
                        SettingsRow::SmtpServer,
                        SettingsRow::SmtpPort,
                        SettingsRow::SmtpSsl,
                    ]);
                }
                rows.push(SettingsRow::Connect);
            }
            EmailConnection::Connected { .. } => {
                rows.push(SettingsRow::Disconnect);
                rows.push(SettingsRow::SendHour);
                rows.push(SettingsRow::Timezone);
                rows.push(SettingsRow::AutoFollowup);
                if self.schedule.auto_followup {
                    rows.push(SettingsRow::FollowupDelay);
                    rows.push(SettingsRow::FollowupCount);
                }
                rows.push(SettingsRow::SaveSchedule);
            }
        }
        rows
    }

    fn current_row(&self) -> Option<SettingsRow> {
        self.rows().get(self.cursor).copied()
    }

    fn clamp_cursor(&mut self) {
        let count = self.rows().len();
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
    }

    fn move_cursor(&mut self, down: bool) {
        let count = self.rows().len();
        if count == 0 {
            return;
        }
        self.cursor = if down {
            (self.cursor + 1) % count
        } else if self.cursor == 0 {
            count - 1
        } else {
            self.cursor - 1
        };
    }

    fn focused_smtp_field(&mut self) -> Option<&mut InputField> {
        match self.current_row()? {
            SettingsRow::SmtpEmail => Some(&mut self.smtp_email),
            SettingsRow::SmtpPassword => Some(&mut self.smtp_password),
            SettingsRow::SmtpServer => Some(&mut self.smtp_server),
            SettingsRow::SmtpPort => Some(&mut self.smtp_port),
            _ => None,
        }
    }

    fn cycle_provider(&mut self, forward: bool) {
        let all = EmailProvider::ALL;
        let index = all.iter().position(|p| *p == self.provider).unwrap_or(0);
        let next = if forward {
            (index + 1) % all.len()
        } else {
            (index + all.len() - 1) % all.len()
        };
        self.provider = all[next];
        self.clamp_cursor();
    }

    fn cycle_hour(&mut self, forward: bool) {
        let hour: i32 = self.schedule.send_time.trim().parse().unwrap_or(9);
        let next = if forward { hour + 1 } else { hour - 1 }.rem_euclid(24);
        self.schedule.send_time = next.to_string();
    }

    fn cycle_timezone(&mut self, forward: bool) {
        let index = TIMEZONES
            .iter()
            .position(|tz| *tz == self.schedule.timezone)
            .unwrap_or(0);
        let next = if forward {
            (index + 1) % TIMEZONES.len()
        } else {
            (index + TIMEZONES.len() - 1) % TIMEZONES.len()
        };
        self.schedule.timezone = TIMEZONES[next].to_string();
    }

    fn adjust_delay(&mut self, up: bool) {
        let delay = self.schedule.followup_delay;
        self.schedule.followup_delay = if up { (delay + 1).min(30) } else { delay.saturating_sub(1).max(1) };
    }

    fn adjust_count(&mut self, up: bool) {
        let count = self.schedule.followup_count;
        self.schedule.followup_count = if up { (count + 1).min(10) } else { count.saturating_sub(1).max(1) };
    }

    fn connect(&self) -> Action {
        if self.connection.is_connecting() {
            return Action::None;
        }
        if self.provider.uses_oauth() {
            return Action::StartOauth(self.provider);
        }

        if self.smtp_email.is_blank()
            || self.smtp_password.is_blank()
            || self.smtp_server.is_blank()
            || self.smtp_port.is_blank()
        {
            return Action::ShowDialog(DialogType::Error(VALIDATION_SMTP_INCOMPLETE.to_string()));
        }
        let Ok(port) = self.smtp_port.value().trim().parse::<u16>() else {
            return Action::ShowDialog(DialogType::Error(
                "SMTP port must be a number between 1 and 65535".to_string(),
            ));
        };

        Action::ConnectSmtp(SmtpCredentials {
            email: self.smtp_email.value().trim().to_string(),
            password: self.smtp_password.value().to_string(),
            server: self.smtp_server.value().trim().to_string(),
            port,
            use_ssl: self.smtp_ssl,
        })
    }

    fn save_schedule(&self) -> Action {
        if !self.connection.is_connected() || self.saving_schedule {
            return Action::None;
        }
        Action::SaveSchedule(self.schedule.clone())
    }

    fn reset_account_form(&mut self) {
        self.provider = EmailProvider::Gmail;
        self.smtp_email.clear();
        self.smtp_password.clear();
        self.smtp_server.clear();
        self.smtp_port.set_value("587");
        self.smtp_ssl = false;
        self.cursor = 0;
        self.editing = false;
    }

    fn activate(&mut self) -> Action {
        match self.current_row() {
            Some(SettingsRow::Provider) => {
                self.cycle_provider(true);
                Action::None
            }
            Some(
                SettingsRow::SmtpEmail
                | SettingsRow::SmtpPassword
                | SettingsRow::SmtpServer
                | SettingsRow::SmtpPort,
            ) => {
                self.editing = true;
                Action::None
            }
            Some(SettingsRow::SmtpSsl) => {
                self.smtp_ssl = !self.smtp_ssl;
                Action::None
            }
            Some(SettingsRow::Connect) => self.connect(),
            Some(SettingsRow::Disconnect) => Action::ShowDialog(DialogType::DisconnectConfirmation),
            Some(SettingsRow::SendHour) => {
                self.cycle_hour(true);
                Action::None
            }
            Some(SettingsRow::Timezone) => {
                self.cycle_timezone(true);
                Action::None
            }
            Some(SettingsRow::AutoFollowup) => {
                self.schedule.auto_followup = !self.schedule.auto_followup;
                self.clamp_cursor();
                Action::None
            }
            Some(SettingsRow::FollowupDelay) => {
                self.adjust_delay(true);
                Action::None
            }
            Some(SettingsRow::FollowupCount) => {
                self.adjust_count(true);
                Action::None
            }
            Some(SettingsRow::SaveSchedule) => self.save_schedule(),
            None => Action::None,
        }
    }

    fn cycle(&mut self, forward: bool) -> Action {
        match self.current_row() {
            Some(SettingsRow::Provider) => self.cycle_provider(forward),
            Some(SettingsRow::SmtpSsl) => self.smtp_ssl = !self.smtp_ssl,
            Some(SettingsRow::SendHour) => self.cycle_hour(forward),
            Some(SettingsRow::Timezone) => self.cycle_timezone(forward),
            Some(SettingsRow::AutoFollowup) => {
                self.schedule.auto_followup = !self.schedule.auto_followup;
                self.clamp_cursor();
            }
            Some(SettingsRow::FollowupDelay) => self.adjust_delay(forward),
            Some(SettingsRow::FollowupCount) => self.adjust_count(forward),
            _ => {}
        }
        Action::None
    }

    fn row_line(&self, row: SettingsRow, focused: bool) -> Line<'static> {
        let (label, value, value_color) = match row {
            SettingsRow::Provider => ("Provider", self.provider.label().to_string(), Color::White),
            SettingsRow::SmtpEmail => ("Email", self.smtp_field_text(&self.smtp_email, focused), Color::White),
            SettingsRow::SmtpPassword => {
                let masked = if focused && self.editing {
                    self.smtp_password.display()
                } else {
                    "•".repeat(self.smtp_password.value().chars().count().min(16))
                };
                ("Password", masked, Color::White)
            }
            SettingsRow::SmtpServer => ("Server", self.smtp_field_text(&self.smtp_server, focused), Color::White),
            SettingsRow::SmtpPort => ("Port", self.smtp_field_text(&self.smtp_port, focused), Color::White),
            SettingsRow::SmtpSsl => {
                let icon = if self.smtp_ssl {
                    self.icons.checked()
                } else {
                    self.icons.unchecked()
                };
                ("Use SSL", icon.to_string(), Color::White)
            }
            SettingsRow::Connect => {
                let label = format!("[ Connect {} ]", self.provider.label());
                return Self::button_line(label, focused, Color::Green);
            }
            SettingsRow::Disconnect => {
                return Self::button_line("[ Disconnect account ]".to_string(), focused, Color::Red);
            }
            SettingsRow::SendHour => ("Send time", format!("{}:00", self.schedule.send_time), Color::White),
            SettingsRow::Timezone => ("Timezone", self.schedule.timezone.clone(), Color::White),
            SettingsRow::AutoFollowup => {
                let icon = if self.schedule.auto_followup {
                    self.icons.checked()
                } else {
                    self.icons.unchecked()
                };
                ("Auto follow-up", icon.to_string(), Color::White)
            }
            SettingsRow::FollowupDelay => (
                "Follow-up delay",
                format!("{} days", self.schedule.followup_delay),
                Color::White,
            ),
            SettingsRow::FollowupCount => (
                "Follow-ups",
                self.schedule.followup_count.to_string(),
                Color::White,
            ),
            SettingsRow::SaveSchedule => {
                let (label, color) = if self.saving_schedule {
                    (format!("{} Saving schedule...", self.icons.busy()), Color::Yellow)
                } else {
                    ("[ Save schedule ]".to_string(), Color::Green)
                };
                return Self::button_line(label, focused, color);
            }
        };

        let label_style = if focused {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if focused { "▸ " } else { "  " };
        Line::from(vec![
            Span::styled(format!("{marker}{label:<17}"), label_style),
            Span::styled(value, Style::default().fg(value_color)),
        ])
    }

    fn smtp_field_text(&self, field: &InputField, focused: bool) -> String {
        if focused && self.editing {
            field.display()
        } else {
            field.value().to_string()
        }
    }

    fn button_line(label: String, focused: bool, color: Color) -> Line<'static> {
        let style = if focused {
            Style::default().fg(color).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(color)
        };
        Line::from(vec![Span::raw("  "), Span::styled(label, style)])
    }

    fn status_line(&self) -> Line<'static> {
        match &self.connection {
            EmailConnection::Unconfigured => Line::from(Span::styled(
                format!("{} No email account connected", self.icons.disconnected()),
                Style::default().fg(Color::Gray),
            )),
            EmailConnection::Connecting(provider) => Line::from(Span::styled(
                format!("{} {} ({})", self.icons.busy(), OAUTH_WAITING, provider.label()),
                Style::default().fg(Color::Yellow),
            )),
            EmailConnection::Connected { email, provider } => Line::from(Span::styled(
                format!("{} {} ({})", self.icons.connected(), email, provider),
                Style::default().fg(Color::Green),
            )),
        }
    }
}

impl Component for SettingsView {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.editing {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    self.editing = false;
                    Action::None
                }
                _ => {
                    if let Some(field) = self.focused_smtp_field() {
                        field.handle_key(key);
                    }
                    Action::None
                }
            };
        }

        if self.connection.is_connecting() {
            return match key.code {
                KeyCode::Esc => Action::CancelOauth,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(true);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(false);
                Action::None
            }
            KeyCode::Enter => self.activate(),
            KeyCode::Left | KeyCode::Char('h') => self.cycle(false),
            KeyCode::Right | KeyCode::Char('l') => self.cycle(true),
            KeyCode::Char('s') => self.save_schedule(),
            KeyCode::Char('x') => {
                if self.connection.is_connected() {
                    Action::ShowDialog(DialogType::DisconnectConfirmation)
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    fn is_capturing_input(&self) -> bool {
        self.editing
    }

    fn update(&mut self, action: Action) -> Action {
        match &action {
            // Persisted schedule values refresh the working copy
            Action::StatusLoaded(status) => {
                self.schedule = status.settings.clone();
                action
            }
            Action::Disconnected => {
                self.reset_account_form();
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let rows = self.rows();
        let account_rows: Vec<SettingsRow> = rows
            .iter()
            .copied()
            .filter(|row| {
                matches!(
                    row,
                    SettingsRow::Provider
                        | SettingsRow::SmtpEmail
                        | SettingsRow::SmtpPassword
                        | SettingsRow::SmtpServer
                        | SettingsRow::SmtpPort
                        | SettingsRow::SmtpSsl
                        | SettingsRow::Connect
                        | SettingsRow::Disconnect
                )
            })
            .collect();
        let schedule_rows: Vec<SettingsRow> = rows
            .iter()
            .copied()
            .filter(|row| !account_rows.contains(row))
            .collect();

        let hint_lines: u16 = if self.connection.is_connecting() { 1 } else { 0 };
        let account_height = account_rows.len() as u16 + hint_lines + 4;
        let chunks =
            Layout::vertical([Constraint::Length(account_height), Constraint::Min(0)]).split(rect);

        let mut account_lines = vec![self.status_line(), Line::default()];
        let mut index = 0;
        for row in &account_rows {
            account_lines.push(self.row_line(*row, index == self.cursor));
            index += 1;
        }
        if self.connection.is_connecting() {
            account_lines.push(Line::from(Span::styled(
                "Press Esc to cancel and pick another provider",
                Style::default().fg(Color::Gray),
            )));
        }

        let account = Paragraph::new(account_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" {} Email account ", self.icons.settings_title()))
                .title_style(Style::default().fg(Color::White))
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(account, chunks[0]);

        if !schedule_rows.is_empty() {
            let mut schedule_lines = Vec::new();
            for row in &schedule_rows {
                schedule_lines.push(self.row_line(*row, index == self.cursor));
                index += 1;
            }
            schedule_lines.push(Line::default());
            schedule_lines.push(Line::from(Span::styled(
                "Sequences go out at the send time in the account timezone.",
                Style::default().fg(Color::Gray),
            )));

            let schedule = Paragraph::new(schedule_lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Schedule ")
                    .title_style(Style::default().fg(Color::White))
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            f.render_widget(schedule, chunks[1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::EmailStatus;

    fn connected_view() -> SettingsView {
        let mut view = SettingsView::new();
        view.update_data(
            EmailConnection::Connected {
                email: "jane@acme.com".to_string(),
                provider: "smtp".to_string(),
            },
            false,
        );
        view
    }

    #[test]
    fn provider_cycles_through_all_options() {
        let mut view = SettingsView::new();
        assert_eq!(view.provider, EmailProvider::Gmail);
        view.handle_key_events(KeyEvent::from(KeyCode::Enter));
        assert_eq!(view.provider, EmailProvider::Outlook);
        view.handle_key_events(KeyEvent::from(KeyCode::Enter));
        assert_eq!(view.provider, EmailProvider::Smtp);
        view.handle_key_events(KeyEvent::from(KeyCode::Enter));
        assert_eq!(view.provider, EmailProvider::Gmail);
    }

    #[test]
    fn smtp_rows_appear_only_for_smtp() {
        let mut view = SettingsView::new();
        assert_eq!(view.rows().len(), 2);
        view.provider = EmailProvider::Smtp;
        assert!(view.rows().contains(&SettingsRow::SmtpPassword));
    }

    #[test]
    fn oauth_provider_connects_via_browser() {
        let mut view = SettingsView::new();
        view.cursor = view.rows().len() - 1; // Connect button
        assert!(matches!(
            view.handle_key_events(KeyEvent::from(KeyCode::Enter)),
            Action::StartOauth(EmailProvider::Gmail)
        ));
    }

    #[test]
    fn incomplete_smtp_form_is_rejected_without_a_request() {
        let mut view = SettingsView::new();
        view.provider = EmailProvider::Smtp;
        view.smtp_email.set_value("jane@acme.com");
        // password and server left empty
        assert!(matches!(
            view.connect(),
            Action::ShowDialog(DialogType::Error(_))
        ));
    }

    #[test]
    fn complete_smtp_form_submits_credentials() {
        let mut view = SettingsView::new();
        view.provider = EmailProvider::Smtp;
        view.smtp_email.set_value("jane@acme.com");
        view.smtp_password.set_value("hunter2");
        view.smtp_server.set_value("smtp.acme.com");
        view.smtp_port.set_value("465");
        view.smtp_ssl = true;
        match view.connect() {
            Action::ConnectSmtp(credentials) => {
                assert_eq!(credentials.port, 465);
                assert!(credentials.use_ssl);
            }
            other => panic!("expected ConnectSmtp, got {other:?}"),
        }
    }

    #[test]
    fn disconnect_needs_confirmation() {
        let mut view = connected_view();
        assert!(matches!(
            view.handle_key_events(KeyEvent::from(KeyCode::Char('x'))),
            Action::ShowDialog(DialogType::DisconnectConfirmation)
        ));
    }

    #[test]
    fn disconnect_resets_the_provider_form_to_gmail() {
        let mut view = connected_view();
        view.provider = EmailProvider::Smtp;
        view.smtp_email.set_value("jane@acme.com");
        view.update(Action::Disconnected);
        assert_eq!(view.provider, EmailProvider::Gmail);
        assert_eq!(view.smtp_email.value(), "");
    }

    #[test]
    fn status_payload_refreshes_the_schedule_form() {
        let mut view = SettingsView::new();
        let mut status = EmailStatus::default();
        status.settings.send_time = "14".to_string();
        status.settings.auto_followup = true;
        view.update(Action::StatusLoaded(status));
        assert_eq!(view.schedule.send_time, "14");
        assert!(view.schedule.auto_followup);
    }

    #[test]
    fn followup_rows_follow_the_toggle() {
        let mut view = connected_view();
        assert!(!view.rows().contains(&SettingsRow::FollowupDelay));
        view.schedule.auto_followup = true;
        assert!(view.rows().contains(&SettingsRow::FollowupDelay));
        assert!(view.rows().contains(&SettingsRow::FollowupCount));
    }

    #[test]
    fn escape_cancels_a_pending_oauth_flow() {
        let mut view = SettingsView::new();
        view.update_data(EmailConnection::Connecting(EmailProvider::Gmail), false);
        assert!(matches!(
            view.handle_key_events(KeyEvent::from(KeyCode::Esc)),
            Action::CancelOauth
        ));
    }

    #[test]
    fn schedule_save_waits_for_a_connection() {
        let view = SettingsView::new();
        assert!(matches!(view.save_schedule(), Action::None));

        let connected = connected_view();
        assert!(matches!(connected.save_schedule(), Action::SaveSchedule(_)));
    }

    #[test]
    fn hour_cycling_wraps_around_midnight() {
        let mut view = connected_view();
        view.schedule.send_time = "23".to_string();
        view.cycle_hour(true);
        assert_eq!(view.schedule.send_time, "0");
        view.cycle_hour(false);
        assert_eq!(view.schedule.send_time, "23");
    }
}
