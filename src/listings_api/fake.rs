//! In-memory listings provider for view and navigation tests.

use super::{AirSchedule, ListingsApi, ScheduleEntry, ShowDetails, ShowSummary};
use chrono::NaiveDate;
use std::cell::RefCell;

/// A call recorded by [`FakeListingsApi`]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Shows,
    ShowDetails(u64),
    Schedule(String, Option<NaiveDate>),
}

/// Serves canned answers and records every call it receives.
#[derive(Debug, Default)]
pub(crate) struct FakeListingsApi {
    shows: Vec<ShowSummary>,
    schedule: Vec<ScheduleEntry>,
    details: Vec<ShowDetails>,
    calls: RefCell<Vec<Call>>,
}

impl FakeListingsApi {
    pub fn with_shows(shows: Vec<ShowSummary>) -> Self {
        Self {
            shows,
            ..Self::default()
        }
    }

    pub fn with_schedule(schedule: Vec<ScheduleEntry>) -> Self {
        Self {
            schedule,
            ..Self::default()
        }
    }

    pub fn with_details(details: Vec<ShowDetails>) -> Self {
        Self {
            details,
            ..Self::default()
        }
    }

    pub fn and_details(mut self, details: Vec<ShowDetails>) -> Self {
        self.details = details;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl ListingsApi for FakeListingsApi {
    fn fetch_shows(&self) -> Vec<ShowSummary> {
        self.calls.borrow_mut().push(Call::Shows);
        self.shows.clone()
    }

    fn fetch_show_details(&self, show_id: u64) -> Option<ShowDetails> {
        self.calls.borrow_mut().push(Call::ShowDetails(show_id));
        self.details.iter().find(|d| d.id == show_id).cloned()
    }

    fn fetch_schedule(&self, country: &str, date: Option<NaiveDate>) -> Vec<ScheduleEntry> {
        self.calls
            .borrow_mut()
            .push(Call::Schedule(country.to_string(), date));
        self.schedule.clone()
    }
}

pub(crate) fn summary(id: u64, name: &str) -> ShowSummary {
    ShowSummary {
        id,
        name: name.to_string(),
        image_url: None,
    }
}

pub(crate) fn entry(id: u64, show: ShowSummary, airdate: &str, airtime: &str) -> ScheduleEntry {
    ScheduleEntry {
        id,
        airdate: Some(airdate.to_string()),
        airtime: Some(airtime.to_string()),
        show,
    }
}

pub(crate) fn details(id: u64, name: &str) -> ShowDetails {
    ShowDetails {
        id,
        name: name.to_string(),
        poster_url: None,
        summary: format!("{} is a show.", name),
        genres: vec!["Drama".to_string(), "Comedy".to_string()],
        rating: Some(7.5),
        network: Some("HBO".to_string()),
        schedule: AirSchedule {
            days: vec!["Monday".to_string(), "Friday".to_string()],
            time: Some("21:00".to_string()),
        },
    }
}
