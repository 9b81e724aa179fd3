//! Country Visualization TUI Library
//!
//! Exposes modules for testing

pub mod api;
pub mod config;
pub mod logging;
pub mod logic;
pub mod model;
pub mod services;

/// Sort order for the country list (by name)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }

    /// The other order (the selector only has two options)
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}
