/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
/// Only the fields the listings views need are declared; everything else in
/// the payload is ignored.
use serde::Deserialize;

/// A show object, as returned by `/shows`, `/shows/{id}` and embedded in
/// schedule entries.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    /// Numeric show identifier
    pub id: u64,
    /// The name of the TV show
    pub name: String,
    /// Poster images in several sizes (null when the show has none)
    #[serde(default)]
    pub image: Option<TvMazeImage>,
    /// Show summary in HTML format (may be null)
    #[serde(default)]
    pub summary: Option<String>,
    /// Genre names
    #[serde(default)]
    pub genres: Vec<String>,
    /// User rating
    #[serde(default)]
    pub rating: Option<TvMazeRating>,
    /// Broadcasting network (null for streaming-only shows)
    #[serde(default)]
    pub network: Option<TvMazeNetwork>,
    /// Weekly airing pattern
    #[serde(default)]
    pub schedule: Option<TvMazeSchedule>,
}

/// Poster image links.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    pub medium: Option<String>,
    pub original: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TvMazeRating {
    pub average: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TvMazeNetwork {
    pub name: String,
}

/// Weekly airing pattern of a show.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSchedule {
    /// Air time as `HH:MM`, empty string when unknown
    #[serde(default)]
    pub time: String,
    /// Weekday names
    #[serde(default)]
    pub days: Vec<String>,
}

/// A single airing from the `/schedule` endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeScheduleEntry {
    /// Episode identifier
    pub id: u64,
    /// Air date as `YYYY-MM-DD` (may be null)
    #[serde(default)]
    pub airdate: Option<String>,
    /// Air time as `HH:MM`, empty string when unknown
    #[serde(default)]
    pub airtime: Option<String>,
    /// The show this episode belongs to
    pub show: TvMazeShow,
}
