//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **CatalogModel**: Country lists, sort order, filter flags
//! - **UiModel**: Control focus, scrolling, toasts
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the App
//! - Catalog transitions take and return values

pub mod catalog;
pub mod ui;

pub use catalog::{CatalogModel, ListOrder};
pub use ui::{Control, UiModel, VimCommandState};

use crate::logic::filters::FilterCriteria;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Country data and its sort/filter state
    pub catalog: CatalogModel,

    /// UI state
    pub ui: UiModel,
}

impl Model {
    pub fn new(criteria: FilterCriteria, vim_mode: bool) -> Self {
        Self {
            catalog: CatalogModel::new(criteria),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Run a catalog transition in place
    pub fn update_catalog(&mut self, transition: impl FnOnce(CatalogModel) -> CatalogModel) {
        let catalog = std::mem::take(&mut self.catalog);
        self.catalog = transition(catalog);
    }

    /// Total card rows for the current working list
    pub fn total_rows(&self) -> usize {
        crate::logic::ui::grid_rows(self.catalog.countries.len(), self.ui.grid.0)
    }

    /// Largest valid scroll offset for the current list and viewport
    pub fn max_scroll(&self) -> usize {
        crate::logic::ui::max_scroll(self.total_rows(), self.ui.grid.1)
    }
}
