use crate::api::models::Lead;
use crate::icons::IconService;
use crate::ui::components::dialogs::common::create_dialog_block;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

/// Blocking modal with every field of one lead.
pub fn render_lead_details_dialog(f: &mut Frame, area: Rect, icons: &IconService, lead: &Lead) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 16, area);
    f.render_widget(Clear, dialog_area);

    let title = format!(" {} Lead details ", icons.info());
    let block = create_dialog_block(&title, Color::Blue);
    f.render_widget(block, dialog_area);

    let content_area = Rect::new(
        dialog_area.x + 2,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(4),
        dialog_area.height.saturating_sub(3),
    );

    let field = |name: &str, value: &str| {
        Line::from(vec![
            Span::styled(format!("{name:<10}"), Style::default().fg(Color::Gray)),
            Span::styled(value.to_string(), Style::default().fg(Color::White)),
        ])
    };

    let mut lines = vec![
        field("Name", &lead.name),
        field("Company", &lead.company),
        field("Title", &lead.title),
        field("Email", &lead.email),
    ];
    for (name, value) in [
        ("Phone", &lead.phone),
        ("LinkedIn", &lead.linkedin),
        ("Source", &lead.source),
    ] {
        if let Some(value) = value {
            lines.push(field(name, value));
        }
    }
    if !lead.insight.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Insight",
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::from(Span::styled(
            lead.insight.clone(),
            Style::default().fg(Color::White),
        )));
    }

    let details = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(details, content_area);

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );
    let instructions = Paragraph::new("Press any key to close")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(instructions, instructions_area);
}
