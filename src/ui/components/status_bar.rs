//! Status bar pinned to the bottom row.

use crate::icons::IconService;
use crate::ui::core::{
    actions::{Action, Tab},
    Component,
};
use crate::utils::text;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Bottom status line.
///
/// Shows the shortcuts for the active view on the left and the account
/// plus selection summary on the right. While a background operation
/// runs, the left side switches to a busy indicator so the user can see
/// why controls are not responding.
pub struct StatusBarComponent {
    pub active_tab: Tab,
    pub busy_label: Option<String>,
    pub connection_label: String,
    pub selected_count: usize,
    pub icons: IconService,
}

impl Default for StatusBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBarComponent {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::default(),
            busy_label: None,
            connection_label: String::new(),
            selected_count: 0,
            icons: IconService::default(),
        }
    }

    pub fn update_data(
        &mut self,
        active_tab: Tab,
        busy_label: Option<String>,
        connection_label: String,
        selected_count: usize,
    ) {
        self.active_tab = active_tab;
        self.busy_label = busy_label;
        self.connection_label = connection_label;
        self.selected_count = selected_count;
    }

    fn shortcut_hint(&self) -> &'static str {
        match self.active_tab {
            Tab::Product => "Enter: edit • a: analyze • g: leads • ?: help • q: quit",
            Tab::Leads => "Space: select • a: all • v: view • e: email • s: export • +/-: count",
            Tab::Sequence => "Enter: edit • p: preview • s: send • d: remove recipient",
            Tab::Settings => "Enter: change • s: save schedule • x: disconnect",
        }
    }
}

impl Component for StatusBarComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (left_text, left_color) = match &self.busy_label {
            Some(label) => (format!("{} {}", self.icons.busy(), label), Color::Yellow),
            None => (self.shortcut_hint().to_string(), Color::Gray),
        };

        let mut right_parts = vec![format!("{} {}", self.icons.mail(), self.connection_label)];
        if self.selected_count > 0 {
            right_parts.push(format!("{} selected", text::count_label(self.selected_count, "lead")));
        }
        let right_text = right_parts.join(" • ");

        let right_width = right_text.chars().count() as u16 + 1;
        let chunks =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).split(rect);

        let left = Paragraph::new(left_text).style(Style::default().fg(left_color));
        let right = Paragraph::new(right_text)
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::Gray));

        f.render_widget(left, chunks[0]);
        f.render_widget(right, chunks[1]);
    }
}
