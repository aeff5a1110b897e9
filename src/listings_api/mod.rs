//! Data structures and traits for TV listings retrieval.
//!
//! This module provides structures to represent scheduled airings, show
//! summaries and full show details, as well as the trait implemented by
//! listings providers. Provider failures never reach the caller: every
//! operation collapses them into an empty or absent result.
mod tvmaze;
mod tvmaze_types;

#[cfg(test)]
pub(crate) mod fake;

pub use tvmaze::{DEFAULT_BASE_URL, TvMazeClient};

use chrono::NaiveDate;
use thiserror::Error;

/// Country code used for the schedule when none is configured
pub const DEFAULT_COUNTRY: &str = "US";

/// Errors that can occur while talking to the listings API.
///
/// These never cross the [`ListingsApi`] boundary. They are logged and turned
/// into an empty or absent result, except for [`ApiClientError::InvalidBaseUrl`]
/// which is reported when the client is constructed.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// The configured base URL cannot be parsed
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// Request to the listings API failed
    #[error("Request failed: {0}")]
    Request(String),

    /// The API answered with a non-success status
    #[error("HTTP {status} {reason}")]
    Status { status: u16, reason: String },

    /// Failed to parse the API's JSON response
    #[error("Failed to parse API response: {0}")]
    Parse(String),
}

/// Compact view of a show, as embedded in schedule entries and the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowSummary {
    /// Numeric show identifier
    pub id: u64,
    /// The name of the show
    pub name: String,
    /// Medium sized poster image, if the show has one
    pub image_url: Option<String>,
}

/// One scheduled airing of a show.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    /// Identifier of the airing (episode id)
    pub id: u64,
    /// Air date as `YYYY-MM-DD`, absent when unknown
    pub airdate: Option<String>,
    /// Air time as 24-hour `HH:MM`, absent when unknown
    pub airtime: Option<String>,
    /// The show being aired
    pub show: ShowSummary,
}

/// Weekly airing pattern of a show.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AirSchedule {
    /// Weekday names the show airs on
    pub days: Vec<String>,
    /// Air time as 24-hour `HH:MM`, absent when unknown
    pub time: Option<String>,
}

/// Full details of a single show.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowDetails {
    /// Numeric show identifier
    pub id: u64,
    /// The name of the show
    pub name: String,
    /// Full size poster image, if the show has one
    pub poster_url: Option<String>,
    /// Show summary as plain text (the API's HTML is stripped on conversion)
    pub summary: String,
    /// Genre names
    pub genres: Vec<String>,
    /// Average user rating
    pub rating: Option<f64>,
    /// Name of the broadcasting network
    pub network: Option<String>,
    /// Weekly airing pattern
    pub schedule: AirSchedule,
}

/// Trait for providers that can fetch TV listings.
///
/// Implementations perform exactly one request per call and never return an
/// error: a failed request is reported as an empty sequence or `None`, which
/// callers cannot tell apart from a legitimately empty answer.
pub trait ListingsApi {
    /// Fetches the show catalog.
    ///
    /// # Returns
    ///
    /// All shows of the first catalog page, or an empty vector on failure
    fn fetch_shows(&self) -> Vec<ShowSummary>;

    /// Fetches full details for a single show.
    ///
    /// # Arguments
    ///
    /// * `show_id` - Identifier of the show, as carried by a [`ShowSummary`]
    ///
    /// # Returns
    ///
    /// The show details, or `None` on failure
    fn fetch_show_details(&self, show_id: u64) -> Option<ShowDetails>;

    /// Fetches the airing schedule of a country.
    ///
    /// # Arguments
    ///
    /// * `country` - ISO 3166-1 country code, e.g. `"US"`
    /// * `date` - Day to fetch; the provider's current day when `None`
    ///
    /// # Returns
    ///
    /// The scheduled airings, or an empty vector on failure
    fn fetch_schedule(&self, country: &str, date: Option<NaiveDate>) -> Vec<ScheduleEntry>;
}

