use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use countryviz::api::Country;
use countryviz::logic::{self, ui::CARD_HEIGHT};

/// Screen rectangles for the cards visible at `scroll_row`
///
/// Returns (card index, rect) pairs in list order. Columns share the width
/// evenly.
fn card_rects(
    inner: Rect,
    count: usize,
    columns: usize,
    visible_rows: usize,
    scroll_row: usize,
) -> Vec<(usize, Rect)> {
    let card_width = inner.width / columns.max(1) as u16;
    let mut rects = Vec::new();

    for row in 0..visible_rows {
        for col in 0..columns {
            let idx = (scroll_row + row) * columns + col;
            if idx >= count {
                return rects;
            }
            rects.push((
                idx,
                Rect {
                    x: inner.x + col as u16 * card_width,
                    y: inner.y + row as u16 * CARD_HEIGHT,
                    width: card_width,
                    height: CARD_HEIGHT,
                },
            ));
        }
    }

    rects
}

fn render_card(f: &mut Frame, area: Rect, country: &Country) {
    let label = Style::default().add_modifier(Modifier::BOLD);
    let title_width = usize::from(area.width.saturating_sub(4));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", logic::formatting::truncate_to_width(&country.name, title_width)),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));

    let lines = vec![
        Line::from(vec![
            Span::styled("Region: ", label),
            Span::raw(country.region.clone()),
        ]),
        Line::from(vec![
            Span::styled("Area (sq. km): ", label),
            Span::raw(logic::formatting::format_area(country.area.km2())),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Grid geometry (columns, visible rows) for a card area, borders included
pub fn grid_geometry(area: Rect) -> (usize, usize) {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    (
        logic::ui::grid_columns(inner.width),
        logic::ui::visible_rows(inner.height),
    )
}

/// Render the country card grid starting at `scroll_row`
pub fn render_cards(f: &mut Frame, area: Rect, countries: &[Country], scroll_row: usize) {
    let block = Block::default().borders(Borders::ALL).title(" Countries ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (columns, visible_rows) = grid_geometry(area);

    // Only show rows that fit completely
    let fitting_rows = if inner.height >= CARD_HEIGHT { visible_rows } else { 0 };

    for (idx, rect) in card_rects(inner, countries.len(), columns, fitting_rows, scroll_row) {
        render_card(f, rect, &countries[idx]);
    }
}
