//! Catalog orchestration methods
//!
//! The control panel actions: filter checkboxes, sort selector and the two
//! buttons. Each runs a pure catalog transition and then brings the card
//! view back to the top.

use countryviz::model::Control;
use countryviz::SortOrder;
use tracing::debug;

use crate::App;

impl App {
    pub(crate) fn toggle_area_filter(&mut self) {
        let enabled = !self.model.catalog.filter_by_area;
        self.model.update_catalog(|c| c.with_area_filter(enabled));
    }

    pub(crate) fn toggle_region_filter(&mut self) {
        let enabled = !self.model.catalog.filter_by_region;
        self.model.update_catalog(|c| c.with_region_filter(enabled));
    }

    /// Change the selector value; sorting happens immediately
    pub(crate) fn select_sort_order(&mut self, order: SortOrder) {
        self.model.update_catalog(|c| c.sorted(order));
        self.scroll_to_top();
        debug!(order = order.as_str(), count = self.model.catalog.countries.len(), "sorted countries");
    }

    pub(crate) fn flip_sort_order(&mut self) {
        let order = self.model.catalog.sort_order.toggled();
        self.select_sort_order(order);
    }

    pub(crate) fn apply_filters(&mut self) {
        let before = self.model.catalog.countries.len();
        self.model.update_catalog(|c| c.filtered());
        let after = self.model.catalog.countries.len();
        self.scroll_to_top();

        debug!(
            by_area = self.model.catalog.filter_by_area,
            by_region = self.model.catalog.filter_by_region,
            before,
            after,
            "applied filters"
        );
        self.model
            .ui
            .show_toast(format!("Filters applied: {} of {} countries", after, before));
    }

    pub(crate) fn reset_filters(&mut self) {
        self.model.update_catalog(|c| c.reset());
        self.scroll_to_top();

        debug!(count = self.model.catalog.countries.len(), "reset filters");
        self.model.ui.show_toast("Filters reset".to_string());
    }

    /// Space/Enter on the focused control
    pub(crate) fn activate_focused_control(&mut self) {
        match self.model.ui.focus {
            Control::AreaFilter => self.toggle_area_filter(),
            Control::RegionFilter => self.toggle_region_filter(),
            Control::SortSelector => self.flip_sort_order(),
            Control::ApplyButton => self.apply_filters(),
            Control::ResetButton => self.reset_filters(),
        }
    }
}
