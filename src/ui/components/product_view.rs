//! Product tab: description form and analysis results.

use crate::api::models::AnalysisResult;
use crate::constants::{MAX_LOCATIONS_SHOWN, MAX_MARKETS_SHOWN, VALIDATION_EMPTY_DESCRIPTION};
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
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Product analysis view.
///
/// # Features
/// - Free-text product description with inline editing
/// - Structured analysis rendering (audience, markets, locations)
/// - Keyword fallback when the backend returns the older shape
/// - Scrollable results for small terminals
///
/// The description text is form state owned by this view; the analysis
/// itself lives in the app state and is pushed in on every update.
pub struct ProductView {
    pub description: InputField,
    pub editing: bool,
    pub analysis: Option<AnalysisResult>,
    pub analyzing: bool,
    pub scroll_offset: u16,
    pub icons: IconService,
}

impl Default for ProductView {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductView {
    pub fn new() -> Self {
        Self {
            description: InputField::new(),
            editing: false,
            analysis: None,
            analyzing: false,
            scroll_offset: 0,
            icons: IconService::default(),
        }
    }

    pub fn update_data(&mut self, analysis: Option<AnalysisResult>, analyzing: bool) {
        let had_analysis = self.analysis.is_some();
        self.analysis = analysis;
        self.analyzing = analyzing;
        // Fresh results start at the top
        if !had_analysis && self.analysis.is_some() {
            self.scroll_offset = 0;
            self.editing = false;
        }
    }

    fn submit(&self) -> Action {
        if self.description.is_blank() {
            return Action::ShowDialog(DialogType::Error(VALIDATION_EMPTY_DESCRIPTION.to_string()));
        }
        if self.analyzing {
            return Action::None;
        }
        Action::SubmitAnalysis(self.description.value().trim().to_string())
    }

    fn section_line(title: &str) -> Line<'static> {
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
    }

    fn field_line(name: &str, value: &str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {name}: "), Style::default().fg(Color::Gray)),
            Span::styled(value.to_string(), Style::default().fg(Color::White)),
        ])
    }

    fn bullet_line(text: String, color: Color) -> Line<'static> {
        Line::from(Span::styled(format!("  • {text}"), Style::default().fg(color)))
    }

    fn analysis_lines(&self) -> Vec<Line<'static>> {
        let Some(analysis) = &self.analysis else {
            return Vec::new();
        };

        let audience = &analysis.target_audience;
        let mut lines = vec![Self::section_line("Target audience")];
        lines.push(Self::field_line("Title", &audience.title));
        lines.push(Self::field_line("Description", &audience.description));
        for (name, value) in [
            ("Industry", &audience.industry),
            ("Company size", &audience.company_size),
            ("Role", &audience.role),
            ("Pain point", &audience.pain_point),
        ] {
            if !value.is_empty() {
                lines.push(Self::field_line(name, value));
            }
        }

        if !analysis.markets.is_empty() {
            lines.push(Line::default());
            lines.push(Self::section_line("Markets"));
            for market in analysis.markets.iter().take(MAX_MARKETS_SHOWN) {
                lines.push(Self::bullet_line(market.name.clone(), Color::White));
                if !market.description.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("    {}", market.description),
                        Style::default().fg(Color::Gray),
                    )));
                }
            }
        }

        // Older backend builds send keywords instead of locations
        if !analysis.ideal_locations.is_empty() {
            lines.push(Line::default());
            lines.push(Self::section_line("Ideal locations"));
            for location in analysis.ideal_locations.iter().take(MAX_LOCATIONS_SHOWN) {
                let text = if location.reason.is_empty() {
                    location.country_region.clone()
                } else {
                    format!("{}: {}", location.country_region, location.reason)
                };
                lines.push(Self::bullet_line(text, Color::White));
            }
        } else if !analysis.search_keywords.is_empty() {
            lines.push(Line::default());
            lines.push(Self::section_line("Search keywords"));
            lines.push(Line::from(Span::styled(
                format!("  {}", analysis.search_keywords.join(", ")),
                Style::default().fg(Color::White),
            )));
        }

        if !analysis.outreach_strategies.is_empty() {
            lines.push(Line::default());
            lines.push(Self::section_line("Outreach strategies"));
            for strategy in &analysis.outreach_strategies {
                lines.push(Self::bullet_line(strategy.name.clone(), Color::White));
                if !strategy.description.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("    {}", strategy.description),
                        Style::default().fg(Color::Gray),
                    )));
                }
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Press 'g' to generate leads for this audience",
            Style::default().fg(Color::Green),
        )));

        lines
    }
}

impl Component for ProductView {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.editing {
            return match key.code {
                KeyCode::Esc => {
                    self.editing = false;
                    Action::None
                }
                KeyCode::Enter => {
                    self.editing = false;
                    self.submit()
                }
                _ => {
                    self.description.handle_key(key);
                    Action::None
                }
            };
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char('i') | KeyCode::Char('e') => {
                self.editing = true;
                Action::None
            }
            KeyCode::Char('a') => self.submit(),
            KeyCode::Char('g') => Action::GenerateLeads,
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
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
        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(rect);

        let (input_text, border_color) = if self.editing {
            (self.description.display(), Color::Yellow)
        } else if self.description.value().is_empty() {
            ("Press Enter to describe your product".to_string(), Color::DarkGray)
        } else {
            (self.description.value().to_string(), Color::DarkGray)
        };

        let input = Paragraph::new(input_text)
            .style(Style::default().fg(if self.editing || !self.description.value().is_empty() {
                Color::White
            } else {
                Color::DarkGray
            }))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" {} Product description ", self.icons.product_title()))
                    .title_style(Style::default().fg(Color::White))
                    .border_style(Style::default().fg(border_color)),
            );
        f.render_widget(input, chunks[0]);

        let results_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Analysis ")
            .title_style(Style::default().fg(Color::White))
            .border_style(Style::default().fg(Color::DarkGray));

        let results = if self.analyzing {
            Paragraph::new(format!("{} Analyzing product...", self.icons.busy()))
                .style(Style::default().fg(Color::Yellow))
                .block(results_block)
        } else if self.analysis.is_some() {
            let lines = self.analysis_lines();
            let max_scroll = (lines.len() as u16).saturating_sub(chunks[1].height.saturating_sub(2));
            self.scroll_offset = self.scroll_offset.min(max_scroll);
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((self.scroll_offset, 0))
                .block(results_block)
        } else {
            Paragraph::new("Describe your product above, then press 'a' to analyze it.")
                .style(Style::default().fg(Color::Gray))
                .block(results_block)
        };

        f.render_widget(results, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::TargetAudience;

    fn analysis_with_markets(count: usize) -> AnalysisResult {
        AnalysisResult {
            target_audience: TargetAudience {
                title: "VP Engineering".to_string(),
                description: "Mid-size SaaS teams".to_string(),
                ..TargetAudience::default()
            },
            markets: (0..count)
                .map(|i| crate::api::models::Market {
                    name: format!("Market {i}"),
                    description: String::new(),
                })
                .collect(),
            ..AnalysisResult::default()
        }
    }

    #[test]
    fn blank_description_is_rejected_without_a_request() {
        let mut view = ProductView::new();
        view.editing = false;
        view.description.set_value("   ");
        let action = view.handle_key_events(KeyEvent::from(KeyCode::Char('a')));
        assert!(matches!(action, Action::ShowDialog(DialogType::Error(_))));
    }

    #[test]
    fn analyze_emits_trimmed_description() {
        let mut view = ProductView::new();
        view.editing = false;
        view.description.set_value("  An AI sales tool  ");
        match view.handle_key_events(KeyEvent::from(KeyCode::Char('a'))) {
            Action::SubmitAnalysis(text) => assert_eq!(text, "An AI sales tool"),
            other => panic!("expected SubmitAnalysis, got {other:?}"),
        }
    }

    #[test]
    fn resubmit_while_busy_is_ignored() {
        let mut view = ProductView::new();
        view.editing = false;
        view.description.set_value("A product");
        view.analyzing = true;
        assert!(matches!(
            view.handle_key_events(KeyEvent::from(KeyCode::Char('a'))),
            Action::None
        ));
    }

    #[test]
    fn markets_render_capped_at_three() {
        let mut view = ProductView::new();
        view.update_data(Some(analysis_with_markets(5)), false);
        let lines = view.analysis_lines();
        let market_lines = lines
            .iter()
            .filter(|line| {
                line.spans
                    .iter()
                    .any(|span| span.content.contains("• Market"))
            })
            .count();
        assert_eq!(market_lines, MAX_MARKETS_SHOWN);
    }

    #[test]
    fn keywords_render_when_locations_absent() {
        let mut analysis = analysis_with_markets(1);
        analysis.search_keywords = vec!["saas".to_string(), "devops".to_string()];
        let mut view = ProductView::new();
        view.update_data(Some(analysis), false);
        let text: String = view
            .analysis_lines()
            .iter()
            .flat_map(|line| line.spans.iter())
            .map(|span| span.content.clone().into_owned())
            .collect();
        assert!(text.contains("Search keywords"));
        assert!(text.contains("saas, devops"));
    }

    #[test]
    fn fresh_results_leave_editing_mode() {
        let mut view = ProductView::new();
        view.editing = true;
        view.update_data(Some(analysis_with_markets(1)), false);
        assert!(!view.editing);
    }
}
