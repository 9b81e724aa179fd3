//! Control Panel UI
//!
//! Renders the two filter checkboxes, the sort selector and the two buttons,
//! highlighting the focused control. Controls are packed into as many lines
//! as the panel width needs and are never split across lines.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use countryviz::model::{CatalogModel, Control};
use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = "   ";

fn checkbox(checked: bool, label: &str) -> String {
    format!("[{}] {}", if checked { "x" } else { " " }, label)
}

/// Text of one control as it appears on screen
fn control_label(catalog: &CatalogModel, control: Control) -> String {
    match control {
        Control::AreaFilter => checkbox(catalog.filter_by_area, "Filter by Area Size"),
        Control::RegionFilter => checkbox(catalog.filter_by_region, "Filter by Region"),
        Control::SortSelector => format!("Sort by Name: < {} >", catalog.sort_order.as_str()),
        Control::ApplyButton => "[ Apply Filters ]".to_string(),
        Control::ResetButton => "[ Reset Filters ]".to_string(),
    }
}

/// Group controls into lines that fit `inner_width` columns
fn pack_controls(catalog: &CatalogModel, inner_width: usize) -> Vec<Vec<Control>> {
    let mut rows = Vec::new();
    let mut current: Vec<Control> = Vec::new();
    let mut used = 0;

    for control in Control::ALL {
        let width = control_label(catalog, control).width();
        if !current.is_empty() && used + SEPARATOR.len() + width > inner_width {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        if !current.is_empty() {
            used += SEPARATOR.len();
        }
        current.push(control);
        used += width;
    }

    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Height of the control panel at `width`, borders included
pub fn calculate_controls_height(catalog: &CatalogModel, width: u16) -> u16 {
    let inner_width = usize::from(width.saturating_sub(2));
    pack_controls(catalog, inner_width).len() as u16 + 2
}

fn build_control_spans(
    catalog: &CatalogModel,
    controls: &[Control],
    focus: Control,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (idx, control) in controls.iter().copied().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(SEPARATOR));
        }

        let style = if control == focus {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if matches!(control, Control::ApplyButton | Control::ResetButton) {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        spans.push(Span::styled(control_label(catalog, control), style));
    }

    spans
}

pub fn render_controls(f: &mut Frame, area: Rect, catalog: &CatalogModel, focus: Control) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Country Visualization ")
        .title_style(Style::default().add_modifier(Modifier::BOLD));

    let inner_width = usize::from(block.inner(area).width);
    let lines: Vec<Line> = pack_controls(catalog, inner_width)
        .iter()
        .map(|row| Line::from(build_control_spans(catalog, row, focus)))
        .collect();

    let controls = Paragraph::new(lines).block(block);

    f.render_widget(controls, area);
}
