//! Sequence tab: outreach composer.

use crate::api::models::Lead;
use crate::constants::VALIDATION_SEQUENCE_INCOMPLETE;
use crate::icons::IconService;
use crate::ui::components::input::InputField;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::utils::text;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::collections::HashMap;

/// Rows above the recipient list in the focus order.
const FIELD_ROWS: usize = 2;

/// Sequence composer view.
///
/// # Features
/// - Subject and template fields with inline editing
/// - Recipient list seeded from the lead roster, with local removal
/// - Personalized preview of the first recipient's message
/// - Sequence submission with a connection pre-check upstream
///
/// Subject and template are form state owned by this view. Recipients
/// and previews are app state pushed in on every update; removal here
/// only emits an action; the roster selection is the source of truth.
pub struct SequenceView {
    pub subject: InputField,
    pub template: InputField,
    pub recipients: Vec<Lead>,
    pub previews: HashMap<String, String>,
    pub previewing: bool,
    pub sending: bool,
    pub cursor: usize,
    pub editing: bool,
    list_state: ListState,
    pub icons: IconService,
}

impl Default for SequenceView {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceView {
    pub fn new() -> Self {
        Self {
            subject: InputField::new(),
            template: InputField::new(),
            recipients: Vec::new(),
            previews: HashMap::new(),
            previewing: false,
            sending: false,
            cursor: 0,
            editing: false,
            list_state: ListState::default(),
            icons: IconService::default(),
        }
    }

    pub fn update_data(
        &mut self,
        recipients: Vec<Lead>,
        previews: HashMap<String, String>,
        previewing: bool,
        sending: bool,
    ) {
        self.recipients = recipients;
        self.previews = previews;
        self.previewing = previewing;
        self.sending = sending;
        self.clamp_cursor();
    }

    /// Reset the form after a sequence goes out.
    pub fn clear_form(&mut self) {
        self.subject.clear();
        self.template.clear();
        self.editing = false;
        self.cursor = 0;
        self.clamp_cursor();
    }

    fn row_count(&self) -> usize {
        FIELD_ROWS + self.recipients.len()
    }

    fn clamp_cursor(&mut self) {
        if self.cursor >= self.row_count() {
            self.cursor = self.row_count().saturating_sub(1);
        }
        self.sync_list_state();
    }

    fn sync_list_state(&mut self) {
        if self.cursor >= FIELD_ROWS {
            self.list_state.select(Some(self.cursor - FIELD_ROWS));
        } else {
            self.list_state.select(None);
        }
    }

    fn focused_recipient(&self) -> Option<&Lead> {
        self.cursor.checked_sub(FIELD_ROWS).and_then(|i| self.recipients.get(i))
    }

    fn focused_field(&mut self) -> Option<&mut InputField> {
        match self.cursor {
            0 => Some(&mut self.subject),
            1 => Some(&mut self.template),
            _ => None,
        }
    }

    fn form_complete(&self) -> bool {
        !self.subject.is_blank() && !self.template.is_blank() && !self.recipients.is_empty()
    }

    fn preview(&self) -> Action {
        if !self.form_complete() {
            return Action::ShowDialog(DialogType::Error(VALIDATION_SEQUENCE_INCOMPLETE.to_string()));
        }
        if self.previewing {
            return Action::None;
        }
        Action::RequestPreview {
            subject: self.subject.value().to_string(),
            template: self.template.value().to_string(),
        }
    }

    fn send(&self) -> Action {
        if !self.form_complete() {
            return Action::ShowDialog(DialogType::Error(VALIDATION_SEQUENCE_INCOMPLETE.to_string()));
        }
        if self.sending {
            return Action::None;
        }
        Action::SubmitSequence {
            subject: self.subject.value().to_string(),
            template: self.template.value().to_string(),
        }
    }

    fn first_preview(&self) -> Option<&str> {
        self.recipients
            .iter()
            .find_map(|lead| self.previews.get(&lead.id))
            .map(String::as_str)
    }

    fn field_paragraph(&self, index: usize, title: &str, height_hint: u16) -> Paragraph<'static> {
        let field = match index {
            0 => &self.subject,
            _ => &self.template,
        };
        let focused = self.cursor == index;
        let border_color = if focused && self.editing {
            Color::Yellow
        } else if focused {
            Color::White
        } else {
            Color::DarkGray
        };

        let content = if focused && self.editing {
            field.display()
        } else {
            field.value().to_string()
        };

        let mut paragraph = Paragraph::new(content).style(Style::default().fg(Color::White)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" {title} "))
                .title_style(Style::default().fg(Color::White))
                .border_style(Style::default().fg(border_color)),
        );
        if height_hint > 3 {
            paragraph = paragraph.wrap(Wrap { trim: false });
        }
        paragraph
    }
}

impl Component for SequenceView {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.editing {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    self.editing = false;
                    Action::None
                }
                _ => {
                    if let Some(field) = self.focused_field() {
                        field.handle_key(key);
                    }
                    Action::None
                }
            };
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if self.row_count() > 0 {
                    self.cursor = (self.cursor + 1) % self.row_count();
                    self.sync_list_state();
                }
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.row_count() > 0 {
                    self.cursor = if self.cursor == 0 {
                        self.row_count() - 1
                    } else {
                        self.cursor - 1
                    };
                    self.sync_list_state();
                }
                Action::None
            }
            KeyCode::Enter => {
                if self.cursor < FIELD_ROWS {
                    self.editing = true;
                    Action::None
                } else {
                    match self.focused_recipient() {
                        Some(lead) => Action::ShowDialog(DialogType::LeadDetails(lead.clone())),
                        None => Action::None,
                    }
                }
            }
            KeyCode::Char('d') => match self.focused_recipient() {
                Some(lead) => Action::RemoveFromSelection(lead.id.clone()),
                None => Action::None,
            },
            KeyCode::Char('p') => self.preview(),
            KeyCode::Char('s') => self.send(),
            _ => Action::None,
        }
    }

    fn is_capturing_input(&self) -> bool {
        self.editing
    }

    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let preview_height: u16 = if self.previewing || self.first_preview().is_some() {
            9
        } else {
            0
        };
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(4),
            Constraint::Length(preview_height),
        ])
        .split(rect);

        f.render_widget(self.field_paragraph(0, "Subject", 3), chunks[0]);
        f.render_widget(self.field_paragraph(1, "Template", 5), chunks[1]);

        let recipients_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(
                " {} Recipients ({}) ",
                self.icons.sequence_title(),
                self.recipients.len()
            ))
            .title_style(Style::default().fg(Color::White))
            .border_style(Style::default().fg(Color::DarkGray));

        if self.recipients.is_empty() {
            let empty = Paragraph::new("No leads selected. Pick leads on the Leads tab first.")
                .style(Style::default().fg(Color::Gray))
                .block(recipients_block);
            f.render_widget(empty, chunks[2]);
        } else {
            let items: Vec<ListItem> = self
                .recipients
                .iter()
                .map(|lead| {
                    let label = if lead.email.is_empty() {
                        lead.name.clone()
                    } else {
                        format!("{} <{}>", lead.name, lead.email)
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{} ", self.icons.mail()), Style::default().fg(Color::Gray)),
                        Span::styled(label, Style::default().fg(Color::White)),
                    ]))
                })
                .collect();

            let list = List::new(items)
                .block(recipients_block)
                .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

            f.render_stateful_widget(list, chunks[2], &mut self.list_state);
        }

        if preview_height > 0 {
            let preview_block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Preview (first recipient) ")
                .title_style(Style::default().fg(Color::White))
                .border_style(Style::default().fg(Color::DarkGray));

            let preview = if self.previewing {
                Paragraph::new(format!("{} Personalizing messages...", self.icons.busy()))
                    .style(Style::default().fg(Color::Yellow))
                    .block(preview_block)
            } else {
                let message = self.first_preview().unwrap_or_default().to_string();
                let mut lines: Vec<Line> =
                    message.lines().map(|l| Line::from(l.to_string())).collect();
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    format!(
                        "Press 's' to send this sequence to {}",
                        text::count_label(self.recipients.len(), "lead")
                    ),
                    Style::default().fg(Color::Green),
                )));
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .style(Style::default().fg(Color::White))
                    .block(preview_block)
            };
            f.render_widget(preview, chunks[3]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(id: &str) -> Lead {
        Lead {
            id: id.to_string(),
            name: format!("Lead {id}"),
            email: format!("{id}@example.com"),
            ..Lead::default()
        }
    }

    fn complete_view() -> SequenceView {
        let mut view = SequenceView::new();
        view.subject.set_value("Quick question");
        view.template.set_value("Hi {{name}}, saw {{company}} is growing.");
        view.update_data(vec![lead("a"), lead("b")], HashMap::new(), false, false);
        view
    }

    #[test]
    fn preview_requires_a_complete_form() {
        let mut view = SequenceView::new();
        view.update_data(vec![lead("a")], HashMap::new(), false, false);
        assert!(matches!(
            view.handle_key_events(KeyEvent::from(KeyCode::Char('p'))),
            Action::ShowDialog(DialogType::Error(_))
        ));

        let mut view = complete_view();
        assert!(matches!(
            view.handle_key_events(KeyEvent::from(KeyCode::Char('p'))),
            Action::RequestPreview { .. }
        ));
    }

    #[test]
    fn send_requires_at_least_one_recipient() {
        let mut view = complete_view();
        view.update_data(Vec::new(), HashMap::new(), false, false);
        assert!(matches!(
            view.handle_key_events(KeyEvent::from(KeyCode::Char('s'))),
            Action::ShowDialog(DialogType::Error(_))
        ));
    }

    #[test]
    fn send_while_in_flight_is_ignored() {
        let mut view = complete_view();
        view.sending = true;
        assert!(matches!(
            view.handle_key_events(KeyEvent::from(KeyCode::Char('s'))),
            Action::None
        ));
    }

    #[test]
    fn removal_targets_the_focused_recipient() {
        let mut view = complete_view();
        // Move past subject and template onto the second recipient
        for _ in 0..3 {
            view.handle_key_events(KeyEvent::from(KeyCode::Char('j')));
        }
        match view.handle_key_events(KeyEvent::from(KeyCode::Char('d'))) {
            Action::RemoveFromSelection(id) => assert_eq!(id, "b"),
            other => panic!("expected removal, got {other:?}"),
        }
    }

    #[test]
    fn removal_key_does_nothing_on_form_fields() {
        let mut view = complete_view();
        assert!(matches!(
            view.handle_key_events(KeyEvent::from(KeyCode::Char('d'))),
            Action::None
        ));
    }

    #[test]
    fn clear_form_resets_fields_but_not_recipients() {
        let mut view = complete_view();
        view.clear_form();
        assert_eq!(view.subject.value(), "");
        assert_eq!(view.template.value(), "");
        assert_eq!(view.recipients.len(), 2);
    }

    #[test]
    fn first_preview_follows_recipient_order() {
        let mut view = complete_view();
        let mut previews = HashMap::new();
        previews.insert("b".to_string(), "Hi Lead b".to_string());
        view.update_data(vec![lead("a"), lead("b")], previews, false, false);
        // Lead "a" has no preview; the first available one is shown
        assert_eq!(view.first_preview(), Some("Hi Lead b"));
    }

    #[test]
    fn typing_goes_to_the_focused_field() {
        let mut view = SequenceView::new();
        view.handle_key_events(KeyEvent::from(KeyCode::Enter));
        assert!(view.editing);
        view.handle_key_events(KeyEvent::from(KeyCode::Char('h')));
        view.handle_key_events(KeyEvent::from(KeyCode::Char('i')));
        view.handle_key_events(KeyEvent::from(KeyCode::Esc));
        assert_eq!(view.subject.value(), "hi");
        assert!(!view.editing);
    }
}
