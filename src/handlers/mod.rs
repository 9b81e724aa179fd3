//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - loader: Startup country list result from the background service
//! - keyboard: User keyboard input
//!
//! Handlers take &mut App and process one event each.

pub mod keyboard;
pub mod loader;

pub use keyboard::handle_key;
pub use loader::handle_load_result;
