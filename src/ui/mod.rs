// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (controls, cards, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - controls: Renders the filter checkboxes, sort selector and buttons
// - cards: Renders the country card grid
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar with counts and active filters
// - toast: Renders toast notifications (brief pop-up messages)

pub mod cards;
pub mod controls;
pub mod layout;
pub mod legend;
pub mod render;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
