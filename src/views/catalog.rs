//! Show catalog view
//!
//! A flat, non-interactive list of shows from the catalog endpoint.

use super::View;
use crate::listings_api::{ListingsApi, ShowSummary};
use crate::theme::Theme;
use std::io::{self, Write};

/// Message shown when the catalog could not be fetched or is empty
pub const CATALOG_ERROR_MESSAGE: &str = "Failed to fetch shows. Please try again later.";

/// The catalog screen
#[derive(Debug)]
pub struct CatalogView {
    limit: Option<usize>,
    shows: Option<Vec<ShowSummary>>,
}

impl CatalogView {
    /// Creates a catalog view showing at most `limit` shows
    pub fn new(limit: Option<usize>) -> Self {
        Self { limit, shows: None }
    }

    /// Fetches the catalog, once
    pub fn activate<A>(&mut self, api: &A)
    where
        A: ListingsApi + ?Sized,
    {
        if self.shows.is_some() {
            return;
        }

        let mut shows = api.fetch_shows();
        if let Some(limit) = self.limit {
            shows.truncate(limit);
        }
        self.shows = Some(shows);
    }

    /// The fetched shows, empty until activated
    pub fn shows(&self) -> &[ShowSummary] {
        self.shows.as_deref().unwrap_or_default()
    }
}

impl View for CatalogView {
    fn render(&self, theme: &Theme, out: &mut dyn Write) -> io::Result<()> {
        match &self.shows {
            None => writeln!(out, "Loading..."),
            Some(shows) if shows.is_empty() => writeln!(out, "{}", CATALOG_ERROR_MESSAGE),
            Some(shows) => {
                for show in shows {
                    writeln!(
                        out,
                        "{} {}",
                        theme.accent(&format!("{:>6}", show.id)),
                        theme.text(&show.name)
                    )?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings_api::fake::{Call, FakeListingsApi, summary};
    use crate::views::render_to_string;

    #[test]
    fn test_catalog_respects_limit() {
        let api = FakeListingsApi::with_shows(vec![
            summary(1, "One"),
            summary(2, "Two"),
            summary(3, "Three"),
        ]);
        let mut view = CatalogView::new(Some(2));

        view.activate(&api);
        view.activate(&api);

        assert_eq!(view.shows().len(), 2);
        assert_eq!(api.calls(), vec![Call::Shows]);
        assert_eq!(
            render_to_string(&view, &Theme::plain()),
            "     1 One\n     2 Two\n"
        );
    }

    #[test]
    fn test_empty_catalog() {
        let api = FakeListingsApi::default();
        let mut view = CatalogView::new(None);

        view.activate(&api);

        assert!(view.shows().is_empty());
        assert_eq!(
            render_to_string(&view, &Theme::plain()),
            "Failed to fetch shows. Please try again later.\n"
        );
    }
}
