/// TVMaze listings client implementation.
use super::tvmaze_types::{TvMazeScheduleEntry, TvMazeShow};
use super::{AirSchedule, ApiClientError, ListingsApi, ScheduleEntry, ShowDetails, ShowSummary};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

/// Public TVMaze API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Listings client for the TVMaze API.
///
/// Every call is a single unauthenticated GET against the configured base URL.
/// There is no caching, no retry and no timeout configuration.
pub struct TvMazeClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeClient {
    /// Creates a client for the public TVMaze endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self, ApiClientError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client for an arbitrary API endpoint.
    ///
    /// Used to point the client at a mirror or a mock server. A trailing
    /// slash is ignored.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Absolute http(s) URL of the API root
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidBaseUrl`] if the URL cannot be parsed or
    /// is not http(s).
    pub fn with_base_url(base_url: &str) -> Result<Self, ApiClientError> {
        let parsed =
            reqwest::Url::parse(base_url).map_err(|e| ApiClientError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiClientError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiClientError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a GET request and decodes the JSON body.
    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiClientError> {
        // Build the API URL
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, ?query, "TVMaze API request");

        // Make the HTTP request with query parameters
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .map_err(|e| ApiClientError::Request(e.to_string()))?;

        // Ensure request was successful
        let status = response.status();
        if !status.is_success() {
            return Err(ApiClientError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        // Parse the JSON response
        response
            .json()
            .map_err(|e| ApiClientError::Parse(e.to_string()))
    }

    /// Converts a TVMaze show to the compact summary used for lists.
    fn convert_summary(show: TvMazeShow) -> ShowSummary {
        ShowSummary {
            id: show.id,
            name: show.name,
            image_url: show.image.and_then(|image| image.medium),
        }
    }

    /// Converts a TVMaze show to full show details.
    ///
    /// The summary arrives as HTML written by third parties; it is reduced to
    /// plain text here so nothing downstream ever renders raw markup.
    fn convert_details(show: TvMazeShow) -> ShowDetails {
        let schedule = show
            .schedule
            .map(|schedule| AirSchedule {
                days: schedule.days,
                time: non_empty(Some(schedule.time)),
            })
            .unwrap_or_default();

        ShowDetails {
            id: show.id,
            name: show.name,
            poster_url: show.image.and_then(|image| image.original),
            summary: show
                .summary
                .map(|s| nanohtml2text::html2text(&s).trim().to_string())
                .unwrap_or_default(),
            genres: show.genres,
            rating: show.rating.and_then(|rating| rating.average),
            network: show.network.map(|network| network.name),
            schedule,
        }
    }

    /// Converts a TVMaze schedule entry, normalizing empty date/time strings.
    fn convert_entry(entry: TvMazeScheduleEntry) -> ScheduleEntry {
        ScheduleEntry {
            id: entry.id,
            airdate: non_empty(entry.airdate),
            airtime: non_empty(entry.airtime),
            show: Self::convert_summary(entry.show),
        }
    }

    /// Builds the query parameters for the schedule endpoint.
    fn schedule_query(country: &str, date: Option<NaiveDate>) -> Vec<(&'static str, String)> {
        let mut query = vec![("country", country.to_string())];
        if let Some(date) = date {
            query.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        query
    }
}

impl ListingsApi for TvMazeClient {
    fn fetch_shows(&self) -> Vec<ShowSummary> {
        match self.get_json::<Vec<TvMazeShow>>("/shows", &[]) {
            Ok(shows) => shows.into_iter().map(Self::convert_summary).collect(),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching shows");
                Vec::new()
            }
        }
    }

    fn fetch_show_details(&self, show_id: u64) -> Option<ShowDetails> {
        let path = format!("/shows/{}", show_id);
        match self.get_json::<TvMazeShow>(&path, &[]) {
            Ok(show) => Some(Self::convert_details(show)),
            Err(e) => {
                tracing::error!(show_id, error = %e, "Error fetching show details");
                None
            }
        }
    }

    fn fetch_schedule(&self, country: &str, date: Option<NaiveDate>) -> Vec<ScheduleEntry> {
        let query = Self::schedule_query(country, date);
        match self.get_json::<Vec<TvMazeScheduleEntry>>("/schedule", &query) {
            Ok(entries) => entries.into_iter().map(Self::convert_entry).collect(),
            Err(e) => {
                tracing::error!(country, error = %e, "Error fetching schedule");
                Vec::new()
            }
        }
    }
}

/// Treats empty (or whitespace-only) strings as missing values.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
