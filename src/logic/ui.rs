//! UI state transition logic
//!
//! Pure functions for control focus cycling, card grid geometry and scrolling.

use crate::model::Control;

/// Width of one country card including borders
pub const CARD_WIDTH: u16 = 32;

/// Height of one country card: border, region, area, border
pub const CARD_HEIGHT: u16 = 4;

const TOAST_DURATION_MS: u128 = 1500;

/// Move focus to the next control, wrapping after the last one
///
/// # Examples
/// ```
/// use countryviz::model::Control;
/// use countryviz::logic::ui::next_control;
///
/// assert_eq!(next_control(Control::AreaFilter), Control::RegionFilter);
/// assert_eq!(next_control(Control::ResetButton), Control::AreaFilter);
/// ```
pub fn next_control(current: Control) -> Control {
    let all = Control::ALL;
    let idx = all.iter().position(|c| *c == current).unwrap_or(0);
    all[(idx + 1) % all.len()]
}

/// Move focus to the previous control, wrapping before the first one
pub fn previous_control(current: Control) -> Control {
    let all = Control::ALL;
    let idx = all.iter().position(|c| *c == current).unwrap_or(0);
    all[(idx + all.len() - 1) % all.len()]
}

/// Number of card columns that fit in `width`
pub fn grid_columns(width: u16) -> usize {
    usize::from(width / CARD_WIDTH).max(1)
}

/// Number of card rows needed for `count` cards
pub fn grid_rows(count: usize, columns: usize) -> usize {
    count.div_ceil(columns.max(1))
}

/// Number of card rows that fit in `height`
pub fn visible_rows(height: u16) -> usize {
    usize::from(height / CARD_HEIGHT).max(1)
}

/// Largest row offset that still fills the viewport
pub fn max_scroll(total_rows: usize, visible_rows: usize) -> usize {
    total_rows.saturating_sub(visible_rows)
}

/// Apply a signed row delta to the scroll offset, clamped to `[0, max]`
pub fn scroll_by(current: usize, delta: isize, max: usize) -> usize {
    current.saturating_add_signed(delta).min(max)
}

/// Check if toast should be dismissed
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}
