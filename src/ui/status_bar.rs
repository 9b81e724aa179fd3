use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use countryviz::logic::formatting;
use countryviz::model::CatalogModel;

/// Build status bar spans (extracted for testability)
fn build_status_spans(catalog: &CatalogModel) -> Vec<Span<'static>> {
    let dim = Style::default().fg(Color::Gray);
    let key = Style::default().fg(Color::Yellow);

    let mut spans = vec![
        Span::raw(formatting::format_count(
            catalog.countries.len(),
            catalog.original().len(),
        )),
        Span::styled(" │ ", dim),
        Span::styled("Sort: ", key),
        Span::raw(catalog.sort_order.as_str().to_string()),
    ];

    if catalog.order_out_of_date() {
        spans.push(Span::styled(" (as fetched)", dim));
    }

    let mut active = Vec::new();
    if catalog.filter_by_area {
        match catalog.area_threshold() {
            Some(threshold) => active.push(format!(
                "area < {} ({})",
                formatting::format_area(Some(threshold)),
                catalog.criteria.reference_country
            )),
            None => active.push("area (no reference)".to_string()),
        }
    }
    if catalog.filter_by_region {
        active.push(format!("region = {}", catalog.criteria.target_region));
    }

    spans.push(Span::styled(" │ ", dim));
    spans.push(Span::styled("Filters: ", key));
    if active.is_empty() {
        spans.push(Span::raw("none"));
    } else {
        spans.push(Span::raw(active.join(", ")));
    }

    spans
}

pub fn render_status_bar(f: &mut Frame, area: Rect, catalog: &CatalogModel) {
    let status = Paragraph::new(Line::from(build_status_spans(catalog)));
    f.render_widget(status, area);
}
