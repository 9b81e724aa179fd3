//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - collation: Locale-aware name comparison
//! - filters: Area and region predicates over the working list
//! - formatting: Display strings for cards and the status bar
//! - sorting: Name ordering of country lists
//! - ui: Focus cycling, card grid geometry and scroll clamping

pub mod collation;
pub mod filters;
pub mod formatting;
pub mod sorting;
pub mod ui;
