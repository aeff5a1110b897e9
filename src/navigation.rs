//! Navigation between the schedule and show detail screens
//!
//! The listing view lives for the whole session. Opening a show pushes a fresh
//! detail view carrying the selected show; going back drops it again, so the
//! listing is shown with the data it already has.

use crate::listings_api::{ListingsApi, ShowSummary};
use crate::theme::Theme;
use crate::views::View;
use crate::views::detail::DetailView;
use crate::views::listing::ListingView;
use std::io::{self, Write};

/// Which screen is on top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Listing,
    Detail,
}

/// Screen stack of the front-end
pub struct Navigator<'a, A>
where
    A: ListingsApi + ?Sized,
{
    api: &'a A,
    listing: ListingView,
    detail: Option<DetailView>,
}

impl<'a, A> Navigator<'a, A>
where
    A: ListingsApi + ?Sized,
{
    /// Creates a navigator starting on the given listing
    ///
    /// The listing is activated right away.
    pub fn new(api: &'a A, mut listing: ListingView) -> Self {
        listing.activate(api);
        Self {
            api,
            listing,
            detail: None,
        }
    }

    /// The screen currently on top
    pub fn screen(&self) -> Screen {
        match self.detail {
            Some(_) => Screen::Detail,
            None => Screen::Listing,
        }
    }

    pub fn listing(&self) -> &ListingView {
        &self.listing
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    /// Opens the detail view for the listing card at `index`
    ///
    /// # Returns
    ///
    /// `false` if there is no card at `index`, in which case nothing changes
    pub fn open(&mut self, index: usize) -> bool {
        match self.listing.select(index) {
            Some(show) => {
                self.open_show(Some(show));
                true
            }
            None => false,
        }
    }

    /// Opens the detail view for a show carried in from elsewhere
    ///
    /// `None` models arriving at the detail screen without a selection.
    pub fn open_show(&mut self, show: Option<ShowSummary>) {
        match &show {
            Some(show) => tracing::info!(show_id = show.id, show = %show.name, "Opening show"),
            None => tracing::info!("Opening detail screen without a show"),
        }

        let mut detail = DetailView::new(show);
        detail.activate(self.api);
        self.detail = Some(detail);
    }

    /// Returns to the listing, discarding the detail view
    ///
    /// # Returns
    ///
    /// `false` if the listing was already on top
    pub fn back(&mut self) -> bool {
        self.detail.take().is_some()
    }

    /// Renders the screen on top
    pub fn render(&self, theme: &Theme, out: &mut dyn Write) -> io::Result<()> {
        match &self.detail {
            Some(detail) => detail.render(theme, out),
            None => self.listing.render(theme, out),
        }
    }
}
