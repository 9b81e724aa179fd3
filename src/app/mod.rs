//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule orchestrates between:
//! - Model state (pure, in countryviz::model)
//! - Logic (pure business logic in countryviz::logic)
//! - Handlers (in src/handlers/)
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod catalog;
pub(crate) mod navigation;
