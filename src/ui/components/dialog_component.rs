//! Modal dialog component.
//!
//! One component owns whichever dialog is currently open and receives
//! keys exclusively while visible. Rendering is delegated to the
//! specialized modules under `dialogs/`.

use crate::constants::{DISCONNECT_CONFIRM, NOT_CONNECTED_PROMPT};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::common::shortcuts;
use crate::ui::components::dialogs::{lead_dialogs, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType, Tab},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, style::Color, widgets::ScrollbarState, Frame};

/// Dialog host.
///
/// # Dialog Types
/// - **Lead details** - read-only view of one roster row
/// - **Disconnect confirmation** - guards the destructive disconnect
/// - **Connect prompt** - offered when a sequence needs an account
/// - **Info / Error** - scrollable message dialogs
/// - **Help / Logs** - full-screen overlays
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub icons: IconService,
    scroll_offset: usize,
    scrollbar_state: ScrollbarState,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            icons: IconService::default(),
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn page_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn page_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(10);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
        self.scrollbar_state = self.scrollbar_state.position(0);
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_offset = usize::MAX;
        self.scrollbar_state = self.scrollbar_state.position(usize::MAX);
    }

    /// Shared scroll keys for the overlay dialogs. Returns `true` when
    /// the key was a scroll key.
    fn handle_scroll_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home => self.scroll_to_top(),
            KeyCode::End => self.scroll_to_bottom(),
            _ => return false,
        }
        true
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::Info(_)) | Some(DialogType::Error(_)) => {
                if self.handle_scroll_key(key) {
                    Action::None
                } else {
                    // Any other key dismisses the dialog
                    Action::HideDialog
                }
            }
            Some(DialogType::LeadDetails(_)) => Action::HideDialog,
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
            Some(DialogType::DisconnectConfirmation) => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => {
                    self.clear_dialog();
                    Action::ConfirmDisconnect
                }
                _ => Action::None,
            },
            Some(DialogType::ConnectPrompt) => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => {
                    self.clear_dialog();
                    Action::SwitchTab(Tab::Settings)
                }
                _ => Action::None,
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                if let (Some(logger), DialogType::Error(message)) = (&self.logger, &dialog_type) {
                    logger.log(format!("Dialog: showing error '{message}'"));
                }
                self.scroll_offset = 0;
                self.scrollbar_state = ScrollbarState::new(0);
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };
        match dialog_type {
            DialogType::LeadDetails(lead) => {
                lead_dialogs::render_lead_details_dialog(f, rect, &self.icons, &lead);
            }
            DialogType::DisconnectConfirmation => {
                let title = format!("{} Confirm disconnect", self.icons.warning());
                system_dialogs::render_confirm_dialog(
                    f,
                    rect,
                    &title,
                    DISCONNECT_CONFIRM,
                    &[shortcuts::ENTER_CONFIRM, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL],
                    Color::Red,
                );
            }
            DialogType::ConnectPrompt => {
                let title = format!("{} Email account required", self.icons.warning());
                system_dialogs::render_confirm_dialog(
                    f,
                    rect,
                    &title,
                    NOT_CONNECTED_PROMPT,
                    &[shortcuts::ENTER_SETTINGS, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL],
                    Color::Yellow,
                );
            }
            DialogType::Info(message) => {
                system_dialogs::render_info_dialog(
                    f,
                    rect,
                    &self.icons,
                    &message,
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
            DialogType::Error(message) => {
                system_dialogs::render_error_dialog(
                    f,
                    rect,
                    &self.icons,
                    &message,
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
            DialogType::Help => {
                system_dialogs::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state);
            }
            DialogType::Logs => {
                system_dialogs::render_logs_dialog(
                    f,
                    rect,
                    self.logger.as_ref(),
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Lead;

    #[test]
    fn disconnect_confirmation_emits_on_enter_only() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::DisconnectConfirmation));
        assert!(dialog.is_visible());

        assert!(matches!(
            dialog.handle_key_events(KeyEvent::from(KeyCode::Char('x'))),
            Action::None
        ));
        assert!(matches!(
            dialog.handle_key_events(KeyEvent::from(KeyCode::Enter)),
            Action::ConfirmDisconnect
        ));
        assert!(!dialog.is_visible());
    }

    #[test]
    fn cancelled_disconnect_leaves_no_trace() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::DisconnectConfirmation));
        assert!(matches!(
            dialog.handle_key_events(KeyEvent::from(KeyCode::Esc)),
            Action::HideDialog
        ));
    }

    #[test]
    fn connect_prompt_routes_to_settings() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::ConnectPrompt));
        assert!(matches!(
            dialog.handle_key_events(KeyEvent::from(KeyCode::Enter)),
            Action::SwitchTab(Tab::Settings)
        ));
        assert!(!dialog.is_visible());
    }

    #[test]
    fn any_key_closes_lead_details() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::LeadDetails(Lead::default())));
        assert!(matches!(
            dialog.handle_key_events(KeyEvent::from(KeyCode::Char('z'))),
            Action::HideDialog
        ));
    }

    #[test]
    fn error_dialog_scrolls_without_closing() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::Error("boom".to_string())));
        assert!(matches!(
            dialog.handle_key_events(KeyEvent::from(KeyCode::Char('j'))),
            Action::None
        ));
        assert!(dialog.is_visible());
        assert!(matches!(
            dialog.handle_key_events(KeyEvent::from(KeyCode::Enter)),
            Action::HideDialog
        ));
    }
}
