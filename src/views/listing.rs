//! Schedule listing view
//!
//! Shows one card per scheduled airing. Selecting a card yields the show
//! summary that the detail view is opened with.

use super::{Poster, View, write_field};
use crate::format::format_airing;
use crate::listings_api::{ListingsApi, ScheduleEntry, ShowSummary};
use crate::theme::Theme;
use chrono::NaiveDate;
use std::io::{self, Write};

/// Message shown when the schedule could not be fetched or is empty
pub const SCHEDULE_ERROR_MESSAGE: &str = "Failed to fetch schedule. Please try again later.";

/// Lifecycle of the listing view
#[derive(Debug, Clone, PartialEq)]
pub enum ListingState {
    /// Waiting for the schedule
    Loading,
    /// The schedule request produced nothing
    Error(String),
    /// The schedule has arrived
    Loaded(Vec<ScheduleEntry>),
}

/// A single rendered schedule entry
#[derive(Debug, Clone, PartialEq)]
pub struct ShowCard {
    /// Show name
    pub title: String,
    /// Formatted `DD/MM/YYYY - H:MM AM|PM`, present only when both the air
    /// date and time are known
    pub airing: Option<String>,
    /// Poster link or placeholder
    pub poster: Poster,
    /// Navigation target for the detail view
    pub target: ShowSummary,
}

impl From<&ScheduleEntry> for ShowCard {
    fn from(entry: &ScheduleEntry) -> Self {
        let airing = match (&entry.airdate, &entry.airtime) {
            (Some(date), Some(time)) => Some(format_airing(date, time)),
            _ => None,
        };

        ShowCard {
            title: entry.show.name.clone(),
            airing,
            poster: Poster::from_url(entry.show.image_url.as_deref(), &entry.show.name),
            target: entry.show.clone(),
        }
    }
}

/// The schedule screen
#[derive(Debug)]
pub struct ListingView {
    country: String,
    date: Option<NaiveDate>,
    state: ListingState,
    requested: bool,
}

impl ListingView {
    /// Creates a listing view in the loading state
    ///
    /// # Arguments
    ///
    /// * `country` - Country code whose schedule is shown
    /// * `date` - Day to show; the API's current day when `None`
    pub fn new(country: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            country: country.into(),
            date,
            state: ListingState::Loading,
            requested: false,
        }
    }

    /// Current state of the view
    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// Fetches the schedule
    ///
    /// Only the first call does anything; the view keeps its result for its
    /// whole lifetime. An empty schedule is indistinguishable from a failed
    /// request and both end in the error state.
    pub fn activate<A>(&mut self, api: &A)
    where
        A: ListingsApi + ?Sized,
    {
        if self.requested {
            return;
        }
        self.requested = true;

        let entries = api.fetch_schedule(&self.country, self.date);
        self.state = if entries.is_empty() {
            ListingState::Error(SCHEDULE_ERROR_MESSAGE.to_string())
        } else {
            tracing::info!(count = entries.len(), country = %self.country, "Schedule loaded");
            ListingState::Loaded(entries)
        };
    }

    /// Cards for the loaded schedule, in API order
    pub fn cards(&self) -> Vec<ShowCard> {
        match &self.state {
            ListingState::Loaded(entries) => entries.iter().map(ShowCard::from).collect(),
            _ => Vec::new(),
        }
    }

    /// Navigation target of the card at `index`
    pub fn select(&self, index: usize) -> Option<ShowSummary> {
        match &self.state {
            ListingState::Loaded(entries) => entries.get(index).map(|entry| entry.show.clone()),
            _ => None,
        }
    }

    fn heading(&self) -> String {
        match self.date {
            Some(date) => format!("Schedule for {} on {}", self.country, date.format("%d/%m/%Y")),
            None => format!("Today's schedule for {}", self.country),
        }
    }
}

impl View for ListingView {
    fn render(&self, theme: &Theme, out: &mut dyn Write) -> io::Result<()> {
        match &self.state {
            ListingState::Loading => writeln!(out, "Loading..."),
            ListingState::Error(message) => writeln!(out, "{}", message),
            ListingState::Loaded(_) => {
                writeln!(out, "{}", theme.title(&self.heading()))?;
                writeln!(out, "{}", theme.rule())?;

                for (index, card) in self.cards().iter().enumerate() {
                    writeln!(out, "[{}] {}", index + 1, theme.title(&card.title))?;
                    if let Some(airing) = &card.airing {
                        write_field(out, theme, "Airs:", airing)?;
                    }
                    writeln!(out, "  {} {}", theme.accent("Poster:"), card.poster.render(theme))?;
                    write_field(out, theme, "Details:", &format!("show #{}", card.target.id))?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings_api::fake::{Call, FakeListingsApi, entry, summary};
    use crate::views::render_to_string;

    fn sample_schedule() -> Vec<ScheduleEntry> {
        vec![
            entry(1, summary(42, "The Answer"), "2024-03-05", "20:00"),
            entry(2, summary(7, "Lucky Seven"), "2024-03-05", "00:30"),
            entry(3, summary(13, "Thirteen"), "2024-03-05", "13:30"),
        ]
    }

    #[test]
    fn test_starts_loading_without_requesting() {
        let view = ListingView::new("US", None);
        assert_eq!(view.state(), &ListingState::Loading);
        assert_eq!(render_to_string(&view, &Theme::plain()), "Loading...\n");
    }

    #[test]
    fn test_empty_schedule_is_an_error() {
        let api = FakeListingsApi::default();
        let mut view = ListingView::new("US", None);

        view.activate(&api);

        assert_eq!(
            view.state(),
            &ListingState::Error(SCHEDULE_ERROR_MESSAGE.to_string())
        );
        assert!(view.cards().is_empty());
        assert_eq!(
            render_to_string(&view, &Theme::plain()),
            "Failed to fetch schedule. Please try again later.\n"
        );
    }

    #[test]
    fn test_loaded_schedule_has_one_card_per_entry() {
        let api = FakeListingsApi::with_schedule(sample_schedule());
        let mut view = ListingView::new("US", None);

        view.activate(&api);

        let cards = view.cards();
        assert_eq!(cards.len(), 3);
        let ids: Vec<u64> = cards.iter().map(|c| c.target.id).collect();
        assert_eq!(ids, vec![42, 7, 13]);
        assert_eq!(cards[0].airing.as_deref(), Some("05/03/2024 - 8:00 PM"));
        assert_eq!(cards[1].airing.as_deref(), Some("05/03/2024 - 12:30 AM"));
        assert_eq!(cards[2].airing.as_deref(), Some("05/03/2024 - 1:30 PM"));
    }

    #[test]
    fn test_activate_fetches_once() {
        let api = FakeListingsApi::with_schedule(sample_schedule());
        let date = NaiveDate::from_ymd_opt(2024, 3, 5);
        let mut view = ListingView::new("GB", date);

        view.activate(&api);
        view.activate(&api);
        let _ = render_to_string(&view, &Theme::plain());

        assert_eq!(api.calls(), vec![Call::Schedule("GB".to_string(), date)]);
    }

    #[test]
    fn test_card_without_airtime_has_no_airing_line() {
        let mut without_time = entry(1, summary(5, "Daytime"), "2024-03-05", "");
        without_time.airtime = None;
        let card = ShowCard::from(&without_time);

        assert_eq!(card.airing, None);
        assert_eq!(card.poster, Poster::Placeholder("Daytime".to_string()));
    }

    #[test]
    fn test_select() {
        let api = FakeListingsApi::with_schedule(sample_schedule());
        let mut view = ListingView::new("US", None);
        assert_eq!(view.select(0), None);

        view.activate(&api);

        assert_eq!(view.select(1), Some(summary(7, "Lucky Seven")));
        assert_eq!(view.select(3), None);
    }

    #[test]
    fn test_render_loaded() {
        let mut schedule = sample_schedule();
        schedule.truncate(1);
        schedule[0].show.image_url = Some("https://img/m/42.jpg".to_string());
        let api = FakeListingsApi::with_schedule(schedule);
        let mut view = ListingView::new("US", None);
        view.activate(&api);

        let theme = Theme {
            rule_width: 4,
            ..Theme::plain()
        };
        let rendered = render_to_string(&view, &theme);

        assert_eq!(
            rendered,
            "Today's schedule for US\n\
             ────\n\
             [1] The Answer\n  \
             Airs: 05/03/2024 - 8:00 PM\n  \
             Poster: https://img/m/42.jpg\n  \
             Details: show #42\n"
        );
    }
}
