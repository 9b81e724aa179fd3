//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! control focus, card scrolling, toasts and vim key state.

use std::time::Instant;

/// Focusable controls in the control panel, in tab order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    AreaFilter,
    RegionFilter,
    SortSelector,
    ApplyButton,
    ResetButton,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::AreaFilter,
        Control::RegionFilter,
        Control::SortSelector,
        Control::ApplyButton,
        Control::ResetButton,
    ];
}

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG,
}

#[derive(Clone, Debug)]
pub struct UiModel {
    /// Control that Space/Enter activates
    pub focus: Control,

    /// First visible card row
    pub scroll_row: usize,

    /// Card grid geometry from the last render (columns, visible rows)
    pub grid: (usize, usize),

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    pub vim_command_state: VimCommandState,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            focus: Control::AreaFilter,
            scroll_row: 0,
            grid: (1, 1),
            vim_mode,
            vim_command_state: VimCommandState::None,
            toast_message: None,
            should_quit: false,
        }
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
