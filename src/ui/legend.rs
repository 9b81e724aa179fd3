use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool) -> Vec<Span<'static>> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    let mut hotkey_spans = vec![
        key("Tab/←→"),
        Span::raw(":Focus  "),
        key("Space"),
        Span::raw(":Activate  "),
        key("a"),
        Span::raw(":Area  "),
        key("o"),
        Span::raw(":Oceania  "),
        key("s"),
        Span::raw(":Sort  "),
        key("f"),
        Span::raw(":Apply  "),
        key("r"),
        Span::raw(":Reset  "),
    ];

    if vim_mode {
        hotkey_spans.extend(vec![
            key("j/k"),
            Span::raw(":Scroll  "),
            key("^d/^u"),
            Span::raw(":½Page  "),
            key("gg/G"),
            Span::raw(":Top/Bottom  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            key("↑/↓"),
            Span::raw(":Scroll  "),
            key("PgUp/PgDn"),
            Span::raw(":Page  "),
            key("Home/End"),
            Span::raw(":Top/Bottom  "),
        ]);
    }

    hotkey_spans.extend(vec![key("q"), Span::raw(":Quit")]);
    hotkey_spans
}

/// Height needed for the legend at `width`, borders included
pub fn calculate_legend_height(width: u16, vim_mode: bool) -> u16 {
    let text_width: usize = build_hotkey_spans(vim_mode)
        .iter()
        .map(|span| span.content.width())
        .sum();
    let inner_width = usize::from(width.saturating_sub(2)).max(1);
    let lines = text_width.div_ceil(inner_width).max(1);
    lines as u16 + 2
}

pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(vim_mode)))
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .wrap(Wrap { trim: false });

    f.render_widget(legend, area);
}
