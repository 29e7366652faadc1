use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::common::{create_instructions_paragraph, InstructionShortcut};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Small centered dialog asking the user to confirm or cancel.
pub fn render_confirm_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    instructions: &[InstructionShortcut],
    color: Color,
) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 6, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .style(Style::default().fg(color));
    f.render_widget(block, dialog_area);

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(2),
    );
    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(content_area);

    let message_paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(create_instructions_paragraph(instructions), chunks[1]);
}

pub fn render_info_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let title = format!("{} Info", icons.info());
    render_scrollable_dialog(f, area, &title, Color::Blue, (60, 10), message, scroll_offset, scrollbar_state);
}

pub fn render_error_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let title = format!("{} Error", icons.error());
    render_scrollable_dialog(f, area, &title, Color::Red, (70, 12), message, scroll_offset, scrollbar_state);
}

/// Shared body for the message dialogs: bordered block, wrapped text,
/// scrollbar when the message overflows.
fn render_scrollable_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    size: (u16, u16),
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(size.0, size.1, area);
    f.render_widget(Clear, dialog_area);

    let instructions = "Press any key to continue • j/k to scroll if needed";

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .style(Style::default().fg(color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines: Vec<&str> = message.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height as usize;

    let message_text = if total_lines > visible_height {
        let max_scroll = total_lines.saturating_sub(visible_height);
        let clamped_offset = scroll_offset.min(max_scroll);

        *scrollbar_state = scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(clamped_offset);

        let visible_lines: Vec<&str> = lines
            .iter()
            .skip(clamped_offset)
            .take(visible_height)
            .copied()
            .collect();
        visible_lines.join("\n")
    } else {
        message.to_string()
    };

    let message_paragraph = Paragraph::new(message_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(ratatui::widgets::Wrap { trim: true });

    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);

    if total_lines > visible_height {
        render_scrollbar(f, content_area, scrollbar_state);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: usize, scrollbar_state: &mut ScrollbarState) {
    let help_content = r"
PROSPECTOR - Lead Outreach Terminal Client
==========================================

TABS
----
1-4         Jump to Product / Leads / Sequence / Settings
Tab         Next tab
Shift+Tab   Previous tab

PRODUCT
-------
Enter       Edit the product description (Esc stops editing)
a           Analyze the product
g           Generate leads from the analysis
j/k         Scroll the analysis results

LEADS
-----
j/k         Move between rows
Space       Select or deselect a lead
a           Select all / clear all
Enter, v    View lead details
e           Email a lead (selects it and opens the Sequence tab)
s           Export leads to a file
+/-         Adjust how many leads the next search fetches

SEQUENCE
--------
j/k         Move between fields and recipients
Enter       Edit the focused field, or view the focused recipient
d           Remove the focused recipient from the sequence
p           Preview the personalized message
s           Send the sequence

SETTINGS
--------
j/k         Move between rows
Enter       Change the focused value or press the focused button
h/l         Cycle the focused value backward/forward
s           Save the schedule
x           Disconnect the email account (asks for confirmation)
Esc         Cancel a pending browser sign-in

GENERAL
-------
?           Toggle this help panel
G           Show debug logs
q           Quit
Ctrl+C      Quit
Esc         Close dialogs (quits when nothing is open)
";

    let help_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, help_area);

    let margin_x = 2;
    let margin_y = 1;
    let help_content_area = Rect::new(
        help_area.x + margin_x,
        help_area.y + margin_y,
        help_area.width.saturating_sub(margin_x * 2),
        help_area.height.saturating_sub(margin_y * 2),
    );

    let lines: Vec<&str> = help_content.lines().collect();
    let total_lines = lines.len();
    let visible_height = help_content_area.height.saturating_sub(2) as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible_lines: Vec<&str> = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect();

    let help_text = visible_lines.join("\n");

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("📖 Help - Press 'Esc' or '?' to close")
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_content_area);

    if total_lines > visible_height {
        render_scrollbar(f, help_content_area, scrollbar_state);
    }
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: Option<&Logger>,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let logs_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, logs_area);

    let margin_x = 2;
    let margin_y = 1;
    let logs_content_area = Rect::new(
        logs_area.x + margin_x,
        logs_area.y + margin_y,
        logs_area.width.saturating_sub(margin_x * 2),
        logs_area.height.saturating_sub(margin_y * 2),
    );

    let logs = match logger {
        Some(logger) => logger.get_logs(),
        None => vec!["No debug logger available".to_string()],
    };

    let logs_content = if logs.is_empty() {
        "No debug logs available".to_string()
    } else {
        logs.join("\n")
    };

    let lines: Vec<&str> = logs_content.lines().collect();
    let total_lines = lines.len();
    let visible_height = logs_content_area.height.saturating_sub(2) as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible_lines: Vec<&str> = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect();

    let logs_text = visible_lines.join("\n");

    let logs_paragraph = Paragraph::new(logs_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(DIALOG_TITLE_DEBUG_LOGS)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(logs_paragraph, logs_content_area);

    if total_lines > visible_height {
        render_scrollbar(f, logs_content_area, scrollbar_state);
    }
}

fn render_scrollbar(f: &mut Frame, area: Rect, scrollbar_state: &mut ScrollbarState) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(Color::Gray))
        .thumb_style(Style::default().fg(Color::White));

    f.render_stateful_widget(scrollbar, area, scrollbar_state);
}
