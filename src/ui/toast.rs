use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Compute where the toast goes: centered horizontally, just below the controls
fn toast_rect(area: Rect, message: &str) -> Rect {
    let max_width = area.width.min(80);
    let toast_width = ((message.width() + 6) as u16).min(max_width);
    let toast_height = 3;

    Rect {
        x: area.x + area.width.saturating_sub(toast_width) / 2,
        y: area.y + 3,
        width: toast_width,
        height: toast_height.min(area.height.saturating_sub(3)),
    }
}

/// Render a toast notification (brief pop-up message)
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_rect(area, message);

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let toast_line = Line::from(vec![
        Span::styled(
            "✓ ",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw(message.to_string()),
    ]);

    let toast_block = Block::default().borders(Borders::ALL).border_style(
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    );

    let toast_text = Paragraph::new(vec![toast_line])
        .block(toast_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast_text, toast_area);
}
