//! # Statistics Tests
//!
//! Verifies that [`PrefetchStats`](pfsim_core::PrefetchStats) counters start
//! at zero and that derived metrics guard their divisions.

use pfsim_core::stats::{PrefetchStats, STATS_SECTIONS};

#[test]
fn default_is_all_zero() {
    let stats = PrefetchStats::default();
    assert_eq!(stats.accesses, 0);
    assert_eq!(stats.demand_misses, 0);
    assert_eq!(stats.prefetch_hits, 0);
    assert_eq!(stats.stride_predictions, 0);
    assert_eq!(stats.sequential_predictions, 0);
    assert_eq!(stats.requests_staged, 0);
    assert_eq!(stats.chained_requests, 0);
    assert_eq!(stats.requests_issued, 0);
}

#[test]
fn usefulness_guards_division_by_zero() {
    let stats = PrefetchStats::default();
    assert!((stats.usefulness() - 0.0).abs() < f64::EPSILON);
}

#[test]
fn usefulness_is_hits_over_issued() {
    let stats = PrefetchStats {
        prefetch_hits: 3,
        requests_issued: 12,
        ..PrefetchStats::default()
    };
    assert!((stats.usefulness() - 0.25).abs() < f64::EPSILON);
}

#[test]
fn section_names_are_stable() {
    assert_eq!(STATS_SECTIONS, &["summary", "prediction", "issue"]);
}

/// Printing must not panic on empty or populated counters.
#[test]
fn printing_is_total() {
    PrefetchStats::default().print();
    let stats = PrefetchStats {
        accesses: 100,
        demand_misses: 40,
        prefetch_hits: 10,
        stride_predictions: 25,
        sequential_predictions: 35,
        requests_staged: 60,
        chained_requests: 20,
        requests_issued: 55,
    };
    stats.print_sections(&["summary".to_string(), "issue".to_string()]);
}
