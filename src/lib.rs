//! Equipment Tracker
//!
//! A small inventory-tracking system: a REST JSON API server persisting
//! equipment records to a flat JSON file, plus the client-side core logic
//! (derived filtered/sorted view, CSV export, form validation) and a typed
//! HTTP client for the API.

use std::sync::Arc;

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod view;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
