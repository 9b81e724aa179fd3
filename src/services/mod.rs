//! External Services
//!
//! This module contains services that interact with external systems:
//! - loader: One-shot country list fetch bound to the view's lifetime

pub mod loader;

pub use loader::{spawn_country_loader, LoadResult};
