use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Control panel (title + controls)
    pub controls_area: Rect,
    /// Card grid area
    pub cards_area: Rect,
    /// Hotkey legend area
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
///
/// `controls_height` is the control panel height for this width, borders
/// included.
pub fn calculate_layout(terminal_size: Rect, vim_mode: bool, controls_height: u16) -> LayoutInfo {
    let legend_height = super::legend::calculate_legend_height(terminal_size.width, vim_mode);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(controls_height), // Control panel (wraps when narrow)
            Constraint::Min(3),                  // Card grid
            Constraint::Length(legend_height),   // Legend (dynamic height, exact fit for wrapped content)
            Constraint::Length(1),               // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        controls_area: chunks[0],
        cards_area: chunks[1],
        legend_area: chunks[2],
        status_area: chunks[3],
    }
}
