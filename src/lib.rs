//! tv_listings - Browse the TV schedule from your terminal
//!
//! This library provides the core functionality of the listings front-end:
//! a client for the TVMaze API, display formatting, and the schedule and
//! show detail views with the navigation between them.

mod config;
mod format;
mod listings_api;
mod navigation;
mod theme;
pub mod views;

// Re-export error types
pub use config::ConfigError;
pub use format::FormatError;
pub use listings_api::ApiClientError;

pub use config::AppConfig;
pub use format::{format_air_date, format_air_time};
pub use listings_api::{
    AirSchedule, DEFAULT_BASE_URL, DEFAULT_COUNTRY, ListingsApi, ScheduleEntry, ShowDetails,
    ShowSummary, TvMazeClient,
};
pub use navigation::{Navigator, Screen};
pub use theme::Theme;

use std::io;
use thiserror::Error;

/// Top-level error type for tv_listings operations
///
/// Listings API failures are not part of this type: the API client turns
/// them into empty results and the views into on-screen messages.
#[derive(Debug, Error)]
pub enum ListingsError {
    /// Error while loading configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error while setting up the API client
    #[error("API client error: {0}")]
    ApiClient(#[from] ApiClientError),

    /// Error from an interactive prompt
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
