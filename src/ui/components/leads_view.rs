//! Leads tab: the prospect roster.

use crate::api::models::Lead;
use crate::constants::{MAX_LEAD_COUNT, MIN_LEAD_COUNT, NO_LEADS_FOUND};
use crate::icons::IconService;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

/// Lead roster view.
///
/// # Features
/// - One row per lead with a selection checkbox
/// - Select-all toggle and per-row toggles
/// - Row actions: view details, seed the sequence composer, export
/// - Batch size adjustment for the next search
///
/// Roster contents and the selection set are app state pushed in on
/// every update; the view only owns its cursor.
pub struct LeadsView {
    pub leads: Vec<Lead>,
    pub selected_ids: Vec<String>,
    pub lead_count: u32,
    pub loading: bool,
    pub has_searched: bool,
    pub cursor: usize,
    table_state: TableState,
    pub icons: IconService,
}

impl Default for LeadsView {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadsView {
    pub fn new() -> Self {
        Self {
            leads: Vec::new(),
            selected_ids: Vec::new(),
            lead_count: crate::constants::DEFAULT_LEAD_COUNT,
            loading: false,
            has_searched: false,
            cursor: 0,
            table_state: TableState::default(),
            icons: IconService::default(),
        }
    }

    pub fn update_data(
        &mut self,
        leads: Vec<Lead>,
        selected_ids: Vec<String>,
        lead_count: u32,
        loading: bool,
        has_searched: bool,
    ) {
        self.leads = leads;
        self.selected_ids = selected_ids;
        self.lead_count = lead_count;
        self.loading = loading;
        self.has_searched = has_searched;
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        if self.leads.is_empty() {
            self.cursor = 0;
            self.table_state.select(None);
        } else {
            if self.cursor >= self.leads.len() {
                self.cursor = self.leads.len() - 1;
            }
            self.table_state.select(Some(self.cursor));
        }
    }

    fn current_lead(&self) -> Option<&Lead> {
        self.leads.get(self.cursor)
    }

    fn is_selected(&self, lead: &Lead) -> bool {
        self.selected_ids.iter().any(|id| id == &lead.id)
    }

    fn all_selected(&self) -> bool {
        !self.leads.is_empty() && self.leads.iter().all(|lead| self.is_selected(lead))
    }

    fn title(&self) -> String {
        if self.selected_ids.is_empty() {
            format!(" {} Leads ({}) ", self.icons.leads_title(), self.leads.len())
        } else {
            format!(
                " {} Leads ({} of {} selected) ",
                self.icons.leads_title(),
                self.selected_ids.len(),
                self.leads.len()
            )
        }
    }

    fn bordered_block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(self.title())
            .title_style(Style::default().fg(Color::White))
            .border_style(Style::default().fg(Color::DarkGray))
    }
}

impl Component for LeadsView {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.leads.is_empty() {
                    self.cursor = (self.cursor + 1) % self.leads.len();
                    self.table_state.select(Some(self.cursor));
                }
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if !self.leads.is_empty() {
                    self.cursor = if self.cursor == 0 {
                        self.leads.len() - 1
                    } else {
                        self.cursor - 1
                    };
                    self.table_state.select(Some(self.cursor));
                }
                Action::None
            }
            KeyCode::Char(' ') => match self.current_lead() {
                Some(lead) => Action::ToggleLeadSelection(lead.id.clone()),
                None => Action::None,
            },
            KeyCode::Char('a') => {
                if self.leads.is_empty() {
                    Action::None
                } else {
                    Action::SetAllSelected(!self.all_selected())
                }
            }
            KeyCode::Enter | KeyCode::Char('v') => match self.current_lead() {
                Some(lead) => Action::ShowDialog(DialogType::LeadDetails(lead.clone())),
                None => Action::None,
            },
            KeyCode::Char('e') => match self.current_lead() {
                Some(lead) => Action::ComposeForLead(lead.id.clone()),
                None => Action::None,
            },
            KeyCode::Char('s') => Action::ExportLeads,
            KeyCode::Char('g') => Action::GenerateLeads,
            KeyCode::Char('+') | KeyCode::Char('=') => {
                Action::SetLeadCount(self.lead_count.saturating_add(1).min(MAX_LEAD_COUNT))
            }
            KeyCode::Char('-') => Action::SetLeadCount(self.lead_count.saturating_sub(1).max(MIN_LEAD_COUNT)),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.loading {
            let placeholder = Paragraph::new(format!("{} Searching for leads...", self.icons.busy()))
                .style(Style::default().fg(Color::Yellow))
                .block(self.bordered_block());
            f.render_widget(placeholder, rect);
            return;
        }

        if self.leads.is_empty() {
            let message = if self.has_searched {
                NO_LEADS_FOUND.to_string()
            } else {
                format!(
                    "No leads yet. Analyze your product, then press 'g' to search for {}.",
                    crate::utils::text::count_label(self.lead_count as usize, "lead")
                )
            };
            let placeholder = Paragraph::new(message)
                .style(Style::default().fg(Color::Gray))
                .block(self.bordered_block());
            f.render_widget(placeholder, rect);
            return;
        }

        let header = Row::new(vec!["", "Name", "Company", "Title", "Email", "Insight"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let rows: Vec<Row> = self
            .leads
            .iter()
            .map(|lead| {
                let checkbox = if self.is_selected(lead) {
                    self.icons.checked()
                } else {
                    self.icons.unchecked()
                };
                Row::new(vec![
                    checkbox.to_string(),
                    lead.name.clone(),
                    lead.company.clone(),
                    lead.title.clone(),
                    lead.email.clone(),
                    lead.insight.clone(),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(3),
            Constraint::Percentage(16),
            Constraint::Percentage(16),
            Constraint::Percentage(16),
            Constraint::Percentage(22),
            Constraint::Percentage(30),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(self.bordered_block())
            .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(table, rect, &mut self.table_state);
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

    fn view_with_leads(ids: &[&str]) -> LeadsView {
        let mut view = LeadsView::new();
        let leads: Vec<Lead> = ids.iter().map(|id| lead(id)).collect();
        view.update_data(leads, Vec::new(), 10, false, true);
        view
    }

    #[test]
    fn space_toggles_the_cursor_lead() {
        let mut view = view_with_leads(&["a", "b"]);
        view.handle_key_events(KeyEvent::from(KeyCode::Char('j')));
        match view.handle_key_events(KeyEvent::from(KeyCode::Char(' '))) {
            Action::ToggleLeadSelection(id) => assert_eq!(id, "b"),
            other => panic!("expected toggle, got {other:?}"),
        }
    }

    #[test]
    fn select_all_targets_the_unselected_state() {
        let mut view = view_with_leads(&["a", "b", "c"]);
        // Partial selection selects the rest
        view.selected_ids = vec!["a".to_string()];
        assert!(matches!(
            view.handle_key_events(KeyEvent::from(KeyCode::Char('a'))),
            Action::SetAllSelected(true)
        ));

        // Everything selected clears
        view.selected_ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert!(matches!(
            view.handle_key_events(KeyEvent::from(KeyCode::Char('a'))),
            Action::SetAllSelected(false)
        ));
    }

    #[test]
    fn view_opens_the_details_dialog() {
        let mut view = view_with_leads(&["a"]);
        match view.handle_key_events(KeyEvent::from(KeyCode::Char('v'))) {
            Action::ShowDialog(DialogType::LeadDetails(lead)) => assert_eq!(lead.id, "a"),
            other => panic!("expected details dialog, got {other:?}"),
        }
    }

    #[test]
    fn email_seeds_the_sequence() {
        let mut view = view_with_leads(&["a", "b"]);
        view.handle_key_events(KeyEvent::from(KeyCode::Char('j')));
        match view.handle_key_events(KeyEvent::from(KeyCode::Char('e'))) {
            Action::ComposeForLead(id) => assert_eq!(id, "b"),
            other => panic!("expected compose, got {other:?}"),
        }
    }

    #[test]
    fn count_adjustment_stays_in_bounds() {
        let mut view = view_with_leads(&["a"]);
        view.lead_count = MAX_LEAD_COUNT;
        assert!(matches!(
            view.handle_key_events(KeyEvent::from(KeyCode::Char('+'))),
            Action::SetLeadCount(n) if n == MAX_LEAD_COUNT
        ));

        view.lead_count = MIN_LEAD_COUNT;
        assert!(matches!(
            view.handle_key_events(KeyEvent::from(KeyCode::Char('-'))),
            Action::SetLeadCount(n) if n == MIN_LEAD_COUNT
        ));
    }

    #[test]
    fn cursor_clamps_when_roster_shrinks() {
        let mut view = view_with_leads(&["a", "b", "c"]);
        view.handle_key_events(KeyEvent::from(KeyCode::Char('j')));
        view.handle_key_events(KeyEvent::from(KeyCode::Char('j')));
        assert_eq!(view.cursor, 2);
        view.update_data(vec![lead("a")], Vec::new(), 10, false, true);
        assert_eq!(view.cursor, 0);
    }

    #[test]
    fn keys_are_inert_on_an_empty_roster() {
        let mut view = LeadsView::new();
        assert!(matches!(
            view.handle_key_events(KeyEvent::from(KeyCode::Char(' '))),
            Action::None
        ));
        assert!(matches!(
            view.handle_key_events(KeyEvent::from(KeyCode::Char('a'))),
            Action::None
        ));
    }
}
