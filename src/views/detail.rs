//! Show detail view

use super::{Poster, View, write_field};
use crate::format::format_air_time;
use crate::listings_api::{ListingsApi, ShowDetails, ShowSummary};
use crate::theme::Theme;
use std::io::{self, Write};

/// Message shown when the view is opened without a show
pub const NO_SELECTION_MESSAGE: &str = "No show selected.";

/// Message shown when the show details could not be fetched
pub const DETAILS_ERROR_MESSAGE: &str = "Failed to fetch show details. Please try again later.";

/// Lifecycle of the detail view
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// Opened without a show identity
    NoSelection,
    /// Waiting for the show details
    Loading,
    /// Nothing to show
    Error(String),
    /// The show details have arrived
    Loaded(ShowDetails),
}

/// Display-ready fields of a loaded show
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPage {
    pub name: String,
    pub poster: Poster,
    pub summary: String,
    /// Genres joined by `", "`
    pub genres: String,
    /// Average rating, blank when unrated
    pub rating: String,
    /// Network name, blank when unknown
    pub network: String,
    /// `"<days> at <time>"`
    pub schedule: String,
}

impl From<&ShowDetails> for DetailPage {
    fn from(details: &ShowDetails) -> Self {
        let days = details.schedule.days.join(", ");
        let time = details.schedule.time.as_deref().map(|time| {
            format_air_time(time).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Showing raw schedule time");
                time.to_string()
            })
        });
        let schedule = match time {
            Some(time) => format!("{} at {}", days, time),
            None => days,
        };

        DetailPage {
            name: details.name.clone(),
            poster: Poster::from_url(details.poster_url.as_deref(), &details.name),
            summary: details.summary.clone(),
            genres: details.genres.join(", "),
            rating: details.rating.map(|r| r.to_string()).unwrap_or_default(),
            network: details.network.clone().unwrap_or_default(),
            schedule,
        }
    }
}

/// The show detail screen
#[derive(Debug)]
pub struct DetailView {
    selection: Option<ShowSummary>,
    state: DetailState,
    requested: bool,
}

impl DetailView {
    /// Creates a detail view for the show carried over from navigation
    ///
    /// # Arguments
    ///
    /// * `selection` - The selected show; `None` when the view was reached
    ///   without one
    pub fn new(selection: Option<ShowSummary>) -> Self {
        let state = match selection {
            Some(_) => DetailState::Loading,
            None => DetailState::NoSelection,
        };

        Self {
            selection,
            state,
            requested: false,
        }
    }

    /// Current state of the view
    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// The show this view was opened for
    pub fn selection(&self) -> Option<&ShowSummary> {
        self.selection.as_ref()
    }

    /// Fetches the show details
    ///
    /// Without a selection the view fails immediately and never touches the
    /// API. Otherwise the details are requested for the selected id, once.
    pub fn activate<A>(&mut self, api: &A)
    where
        A: ListingsApi + ?Sized,
    {
        if self.requested {
            return;
        }
        self.requested = true;

        let Some(show) = &self.selection else {
            self.state = DetailState::Error(NO_SELECTION_MESSAGE.to_string());
            return;
        };

        self.state = match api.fetch_show_details(show.id) {
            Some(details) => DetailState::Loaded(details),
            None => DetailState::Error(DETAILS_ERROR_MESSAGE.to_string()),
        };
    }

    /// Display fields, once loaded
    pub fn page(&self) -> Option<DetailPage> {
        match &self.state {
            DetailState::Loaded(details) => Some(DetailPage::from(details)),
            _ => None,
        }
    }
}

impl View for DetailView {
    fn render(&self, theme: &Theme, out: &mut dyn Write) -> io::Result<()> {
        match &self.state {
            DetailState::NoSelection | DetailState::Loading => writeln!(out, "Loading..."),
            DetailState::Error(message) => writeln!(out, "{}", message),
            DetailState::Loaded(details) => {
                let page = DetailPage::from(details);

                writeln!(out, "{}", theme.title(&page.name))?;
                writeln!(out, "{}", theme.rule())?;
                writeln!(out, "  {} {}", theme.accent("Poster:"), page.poster.render(theme))?;
                if !page.summary.is_empty() {
                    writeln!(out)?;
                    for line in page.summary.lines() {
                        writeln!(out, "  {}", theme.text(line))?;
                    }
                    writeln!(out)?;
                }
                write_field(out, theme, "Genres:", &page.genres)?;
                write_field(out, theme, "Rating:", &page.rating)?;
                write_field(out, theme, "Network:", &page.network)?;
                write_field(out, theme, "Schedule:", &page.schedule)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings_api::fake::{Call, FakeListingsApi, details, summary};
    use crate::views::render_to_string;

    #[test]
    fn test_no_selection_fails_without_calling_api() {
        let api = FakeListingsApi::with_details(vec![details(42, "The Answer")]);
        let mut view = DetailView::new(None);
        assert_eq!(view.state(), &DetailState::NoSelection);

        view.activate(&api);

        assert_eq!(
            view.state(),
            &DetailState::Error(NO_SELECTION_MESSAGE.to_string())
        );
        assert!(api.calls().is_empty());
        assert_eq!(render_to_string(&view, &Theme::plain()), "No show selected.\n");
    }

    #[test]
    fn test_missing_details_fail_after_one_call() {
        let api = FakeListingsApi::default();
        let mut view = DetailView::new(Some(summary(42, "The Answer")));
        assert_eq!(view.state(), &DetailState::Loading);

        view.activate(&api);
        view.activate(&api);

        assert_eq!(
            view.state(),
            &DetailState::Error(DETAILS_ERROR_MESSAGE.to_string())
        );
        assert_eq!(api.calls(), vec![Call::ShowDetails(42)]);
    }

    #[test]
    fn test_loaded_details() {
        let api = FakeListingsApi::with_details(vec![details(42, "The Answer")]);
        let mut view = DetailView::new(Some(summary(42, "The Answer")));

        view.activate(&api);

        let page = view.page().unwrap();
        assert_eq!(page.name, "The Answer");
        assert_eq!(page.poster, Poster::Placeholder("The Answer".to_string()));
        assert_eq!(page.genres, "Drama, Comedy");
        assert_eq!(page.rating, "7.5");
        assert_eq!(page.network, "HBO");
        assert_eq!(page.schedule, "Monday, Friday at 9:00 PM");
        assert_eq!(view.selection().map(|s| s.id), Some(42));
    }

    #[test]
    fn test_page_with_missing_optional_fields() {
        let mut show = details(1, "Sparse");
        show.rating = None;
        show.network = None;
        show.poster_url = Some("https://img/o/1.jpg".to_string());
        show.schedule.time = None;

        let page = DetailPage::from(&show);

        assert_eq!(page.rating, "");
        assert_eq!(page.network, "");
        assert_eq!(page.poster, Poster::Image("https://img/o/1.jpg".to_string()));
        assert_eq!(page.schedule, "Monday, Friday");
    }

    #[test]
    fn test_whole_rating_has_no_fraction() {
        let mut show = details(1, "Nine");
        show.rating = Some(9.0);
        assert_eq!(DetailPage::from(&show).rating, "9");
    }

    #[test]
    fn test_render_loaded() {
        let api = FakeListingsApi::with_details(vec![details(42, "The Answer")]);
        let mut view = DetailView::new(Some(summary(42, "The Answer")));
        view.activate(&api);

        let theme = Theme {
            rule_width: 4,
            ..Theme::plain()
        };

        assert_eq!(
            render_to_string(&view, &theme),
            "The Answer\n\
             ────\n  \
             Poster: [No Image] The Answer\n\
             \n  \
             The Answer is a show.\n\
             \n  \
             Genres: Drama, Comedy\n  \
             Rating: 7.5\n  \
             Network: HBO\n  \
             Schedule: Monday, Friday at 9:00 PM\n"
        );
    }
}
