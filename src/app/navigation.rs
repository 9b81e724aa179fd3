//! Card scrolling methods
//!
//! Scroll offsets are in card rows and clamped against the grid geometry
//! recorded by the last render.

use countryviz::logic;

use crate::App;

impl App {
    pub(crate) fn scroll_cards_by(&mut self, delta: isize) {
        let max = self.model.max_scroll();
        self.model.ui.scroll_row = logic::ui::scroll_by(self.model.ui.scroll_row, delta, max);
    }

    /// Scroll by one viewport (half a viewport with `half`)
    pub(crate) fn scroll_cards_by_page(&mut self, down: bool, half: bool) {
        let visible = self.model.ui.grid.1;
        let step = if half { (visible / 2).max(1) } else { visible.max(1) };
        let delta = step as isize;
        self.scroll_cards_by(if down { delta } else { -delta });
    }

    pub(crate) fn scroll_to_top(&mut self) {
        self.model.ui.scroll_row = 0;
    }

    pub(crate) fn scroll_to_bottom(&mut self) {
        self.model.ui.scroll_row = self.model.max_scroll();
    }
}
