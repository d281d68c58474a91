//! Mock place search for the map window.
//!
//! Typing updates the query and debounces a lookup. When the debounce
//! fires, a blank query clears the result list at once; anything else
//! publishes three synthetic places after a simulated lookup latency.
//! Submitting a query files it under recent searches.
//!
//! With the default config, results appear 600ms after the last
//! keystroke: a 300ms quiet window plus 300ms of latency.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::debounce::Debouncer;
use crate::schedule::{Scheduler, TimerId};

/// How many recent searches are remembered.
pub const RECENT_LIMIT: usize = 5;

/// Kind of place a result points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceKind {
    City,
    Station,
    Park,
}

/// One entry in the result dropdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u32,
    pub name: String,
    pub kind: PlaceKind,
}

/// The three places a query expands to.
#[must_use]
pub fn mock_results(query: &str) -> Vec<SearchResult> {
    vec![
        SearchResult {
            id: 1,
            name: format!("{query} (City Center)"),
            kind: PlaceKind::City,
        },
        SearchResult {
            id: 2,
            name: format!("{query} Main Station"),
            kind: PlaceKind::Station,
        },
        SearchResult {
            id: 3,
            name: format!("{query} Central Park"),
            kind: PlaceKind::Park,
        },
    ]
}

/// Most-recent-first list of submitted queries, without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearches {
    entries: VecDeque<String>,
}

impl RecentSearches {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `query` to the front, dropping an older copy and anything past
    /// [`RECENT_LIMIT`].
    pub fn record(&mut self, query: &str) {
        self.entries.retain(|q| q != query);
        self.entries.push_front(query.to_string());
        self.entries.truncate(RECENT_LIMIT);
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum SearchTimer {
    Lookup(String),
    Publish(String),
}

/// Search box state: query, debounced lookups, results, recent list.
#[derive(Clone, Debug)]
pub struct PlaceSearch {
    latency: Duration,
    debouncer: Debouncer,
    timers: Scheduler<SearchTimer>,
    in_flight: Option<TimerId>,
    query: String,
    results: Vec<SearchResult>,
    show_results: bool,
    recent: RecentSearches,
}

impl PlaceSearch {
    /// Create a search box using the config's debounce window and latency.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_timing(config.debounce_window, config.search_latency)
    }

    /// Create a search box with explicit timing.
    #[must_use]
    pub fn with_timing(debounce_window: Duration, latency: Duration) -> Self {
        Self {
            latency,
            debouncer: Debouncer::new(debounce_window),
            timers: Scheduler::new(),
            in_flight: None,
            query: String::new(),
            results: Vec::new(),
            show_results: false,
            recent: RecentSearches::new(),
        }
    }

    /// The text in the search box changed.
    pub fn on_query_change(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.debouncer
            .call(&mut self.timers, SearchTimer::Lookup(self.query.clone()));
    }

    /// Let `elapsed` time pass, running due lookups and publishing results.
    pub fn advance(&mut self, elapsed: Duration) {
        let latency = self.latency;
        let debouncer = &mut self.debouncer;
        let in_flight = &mut self.in_flight;
        let results = &mut self.results;
        let show_results = &mut self.show_results;

        self.timers.advance_with(elapsed, |timers, due| match due.event {
            SearchTimer::Lookup(query) => {
                if !debouncer.fired(due.id) {
                    return;
                }
                if query.trim().is_empty() {
                    if let Some(stale) = in_flight.take() {
                        timers.cancel(stale);
                    }
                    results.clear();
                    *show_results = false;
                } else {
                    tracing::trace!(%query, "search lookup started");
                    *in_flight = Some(timers.schedule(latency, SearchTimer::Publish(query)));
                }
            }
            SearchTimer::Publish(query) => {
                if *in_flight != Some(due.id) {
                    return;
                }
                *in_flight = None;
                *results = mock_results(&query);
                *show_results = true;
                tracing::debug!(%query, count = results.len(), "search results published");
            }
        });
    }

    /// Enter pressed: remember a non-blank query and hide the dropdown.
    pub fn submit(&mut self) -> bool {
        if self.query.trim().is_empty() {
            return false;
        }
        self.recent.record(&self.query);
        self.show_results = false;
        true
    }

    /// Click outside the search box.
    pub fn dismiss(&mut self) {
        self.show_results = false;
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Latest published results.
    #[must_use]
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Whether the dropdown is open.
    #[must_use]
    pub fn showing_results(&self) -> bool {
        self.show_results
    }

    /// Submitted queries, newest first.
    #[must_use]
    pub fn recent(&self) -> &RecentSearches {
        &self.recent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_results() {
        let results = mock_results("Oslo");
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Oslo (City Center)", "Oslo Main Station", "Oslo Central Park"]
        );
        let ids: Vec<_> = results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(results[1].kind, PlaceKind::Station);
    }

    #[test]
    fn test_recent_dedupes_and_caps() {
        let mut recent = RecentSearches::new();
        for q in ["a", "b", "c", "d", "e", "f"] {
            recent.record(q);
        }
        assert_eq!(recent.iter().collect::<Vec<_>>(), vec!["f", "e", "d", "c", "b"]);

        recent.record("c");
        assert_eq!(recent.iter().collect::<Vec<_>>(), vec!["c", "f", "e", "d", "b"]);
        assert_eq!(recent.len(), RECENT_LIMIT);
    }

    #[test]
    fn test_submit_blank_is_ignored() {
        let mut search = PlaceSearch::new(&GameConfig::default());
        search.on_query_change("   ");
        assert!(!search.submit());
        assert!(search.recent().is_empty());
    }
}
