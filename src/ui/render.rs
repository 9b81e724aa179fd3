use ratatui::Frame;

use super::{cards, controls, layout, legend, status_bar, toast};
use crate::App;

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let controls_height = controls::calculate_controls_height(&app.model.catalog, size.width);
    let layout_info = layout::calculate_layout(size, app.model.ui.vim_mode, controls_height);

    controls::render_controls(
        f,
        layout_info.controls_area,
        &app.model.catalog,
        app.model.ui.focus,
    );

    // Record grid geometry so key handling can clamp scrolling, and clamp the
    // current offset before drawing in case the terminal was resized
    let grid = cards::grid_geometry(layout_info.cards_area);
    if grid != app.model.ui.grid {
        app.model.ui.grid = grid;
        app.model.ui.scroll_row = app.model.ui.scroll_row.min(app.model.max_scroll());
    }
    cards::render_cards(
        f,
        layout_info.cards_area,
        &app.model.catalog.countries,
        app.model.ui.scroll_row,
    );

    legend::render_legend(f, layout_info.legend_area, app.model.ui.vim_mode);

    status_bar::render_status_bar(f, layout_info.status_area, &app.model.catalog);

    if let Some((message, _timestamp)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
