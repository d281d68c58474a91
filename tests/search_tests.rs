//! Debounce and mock search integration tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use memory_match::core::GameConfig;
use memory_match::debounce::Debounced;
use memory_match::search::{PlaceKind, PlaceSearch};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// =============================================================================
// Debounce
// =============================================================================

/// Five calls within 100ms collapse into one call with the fifth's args,
/// fired 300ms after the last.
#[test]
fn test_debounce_burst() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let mut debounced = Debounced::new(ms(300), move |query: &'static str| {
        sink.borrow_mut().push(query);
    });

    for (i, query) in ["h", "he", "hel", "hell", "hello"].into_iter().enumerate() {
        if i > 0 {
            debounced.advance(ms(20));
        }
        debounced.call(query);
    }
    assert_eq!(debounced.now(), ms(80));

    debounced.advance(ms(299));
    assert!(calls.borrow().is_empty());

    debounced.advance(ms(1));
    assert_eq!(*calls.borrow(), vec!["hello"]);
    assert_eq!(debounced.now(), ms(380));
}

// =============================================================================
// Place search
// =============================================================================

/// Results show up after the quiet window plus lookup latency.
#[test]
fn test_results_after_debounce_and_latency() {
    let mut search = PlaceSearch::new(&GameConfig::default());
    search.on_query_change("P");
    search.advance(ms(50));
    search.on_query_change("Pa");
    search.advance(ms(50));
    search.on_query_change("Paris");

    search.advance(ms(599));
    assert!(search.results().is_empty());
    assert!(!search.showing_results());

    search.advance(ms(1));
    assert!(search.showing_results());
    let names: Vec<_> = search.results().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Paris (City Center)", "Paris Main Station", "Paris Central Park"]
    );
    assert_eq!(search.results()[2].kind, PlaceKind::Park);
}

/// Clearing the box hides results once the debounce fires, with no latency.
#[test]
fn test_blank_query_clears_results() {
    let mut search = PlaceSearch::new(&GameConfig::default());
    search.on_query_change("Rome");
    search.advance(ms(600));
    assert_eq!(search.results().len(), 3);

    search.on_query_change("  ");
    search.advance(ms(299));
    assert!(search.showing_results());
    search.advance(ms(1));
    assert!(search.results().is_empty());
    assert!(!search.showing_results());
}

/// A blank query that lands while a lookup is in flight stops it
/// from publishing.
#[test]
fn test_blank_query_cancels_in_flight_lookup() {
    let mut search = PlaceSearch::new(&GameConfig::default());
    search.on_query_change("Rome");
    search.advance(ms(300));

    search.on_query_change("");
    search.advance(ms(1000));
    assert!(search.results().is_empty());
    assert!(!search.showing_results());
}

/// A newer lookup supersedes an older one still waiting on latency.
#[test]
fn test_newer_lookup_wins() {
    let mut search = PlaceSearch::new(&GameConfig::default());
    search.on_query_change("Lyon");
    search.advance(ms(300));
    search.on_query_change("Lille");
    search.advance(ms(1000));

    assert_eq!(search.results()[0].name, "Lille (City Center)");
}

/// Submitting records recent searches, most recent first.
#[test]
fn test_submit_records_recent() {
    let mut search = PlaceSearch::new(&GameConfig::default());
    for query in ["Oslo", "Bergen", "Oslo"] {
        search.on_query_change(query);
        assert!(search.submit());
    }
    let recent: Vec<_> = search.recent().iter().collect();
    assert_eq!(recent, vec!["Oslo", "Bergen"]);
    assert!(!search.showing_results());
}

/// Dismissing hides the dropdown but keeps the results.
#[test]
fn test_dismiss() {
    let mut search = PlaceSearch::with_timing(ms(10), ms(10));
    search.on_query_change("Kyoto");
    search.advance(ms(20));
    assert!(search.showing_results());

    search.dismiss();
    assert!(!search.showing_results());
    assert_eq!(search.results().len(), 3);
    assert_eq!(search.query(), "Kyoto");
}
