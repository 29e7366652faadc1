//! Tab bar spanning the top of the screen.

use crate::ui::core::{
    actions::{Action, Tab},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Tabs,
    Frame,
};

/// Top-level navigation between the four workflow views.
///
/// Exactly one tab is active at a time; the bar only emits switch
/// actions and the app decides which view receives events and data.
pub struct TabBarComponent {
    pub active_tab: Tab,
}

impl Default for TabBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TabBarComponent {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::default(),
        }
    }

    pub fn update_data(&mut self, active_tab: Tab) {
        self.active_tab = active_tab;
    }
}

impl Component for TabBarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('1') => Action::SwitchTab(Tab::Product),
            KeyCode::Char('2') => Action::SwitchTab(Tab::Leads),
            KeyCode::Char('3') => Action::SwitchTab(Tab::Sequence),
            KeyCode::Char('4') => Action::SwitchTab(Tab::Settings),
            KeyCode::Tab => Action::NextTab,
            KeyCode::BackTab => Action::PreviousTab,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let titles: Vec<Line> = Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!(" {} {} ", i + 1, tab.title())))
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.active_tab.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│");

        f.render_widget(tabs, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keys_switch_tabs() {
        let mut bar = TabBarComponent::new();
        assert!(matches!(
            bar.handle_key_events(KeyEvent::from(KeyCode::Char('3'))),
            Action::SwitchTab(Tab::Sequence)
        ));
        assert!(matches!(
            bar.handle_key_events(KeyEvent::from(KeyCode::Char('1'))),
            Action::SwitchTab(Tab::Product)
        ));
    }

    #[test]
    fn tab_key_cycles() {
        let mut bar = TabBarComponent::new();
        assert!(matches!(
            bar.handle_key_events(KeyEvent::from(KeyCode::Tab)),
            Action::NextTab
        ));
        assert!(matches!(
            bar.handle_key_events(KeyEvent::from(KeyCode::BackTab)),
            Action::PreviousTab
        ));
    }

    #[test]
    fn unrelated_keys_pass_through() {
        let mut bar = TabBarComponent::new();
        assert!(matches!(
            bar.handle_key_events(KeyEvent::from(KeyCode::Char('x'))),
            Action::None
        ));
    }
}
