//! Integration tests for `InMemoryEventLog`.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{TimeDelta, TimeZone, Utc};
use tracker_core::clock::Clock;
use tracker_core::log::EventLog;
use tracker_event_store::InMemoryEventLog;
use tracker_test_support::{FixedClock, SteppingClock, purchase, purchase_at};

// --- append ---

#[test]
fn test_sequential_appends_return_one_through_n() {
    let log = InMemoryEventLog::new();
    let now = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();

    let counts: Vec<u64> = (0..10).map(|_| log.append(purchase_at(now))).collect();

    assert_eq!(counts, (1..=10).collect::<Vec<u64>>());
    assert_eq!(log.len(), 10);
}

#[test]
fn test_concurrent_appends_from_threads_return_distinct_counts() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 250;

    let log = InMemoryEventLog::new();
    let now = Utc::now();

    let counts: Vec<u64> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    (0..PER_THREAD)
                        .map(|_| log.append(purchase_at(now)))
                        .collect::<Vec<u64>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect()
    });

    let expected = (THREADS * PER_THREAD) as u64;
    let distinct: HashSet<u64> = counts.iter().copied().collect();
    assert_eq!(counts.len() as u64, expected);
    assert_eq!(distinct, (1..=expected).collect::<HashSet<u64>>());
    assert_eq!(log.stats(TimeDelta::weeks(52 * 10_000), &FixedClock(now)).total, expected);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_from_tasks_have_no_gaps() {
    let log = Arc::new(InMemoryEventLog::new());
    let now = Utc::now();

    let handles: Vec<_> = (0..500)
        .map(|_| {
            let log = Arc::clone(&log);
            tokio::spawn(async move { log.append(purchase_at(now)) })
        })
        .collect();

    let mut counts = Vec::with_capacity(handles.len());
    for handle in handles {
        counts.push(handle.await.unwrap());
    }
    counts.sort_unstable();

    assert_eq!(counts, (1..=500).collect::<Vec<u64>>());
}

#[test]
fn test_stats_during_concurrent_appends_see_every_stored_event_as_recent() {
    // Writers stamp events with the same clock the reader uses, and the clock
    // never repeats an instant, so an event in a snapshot is always older
    // than the snapshot's own `as_of`.
    let clock = SteppingClock::starting_at(FixedClock::reference().now());
    let log = InMemoryEventLog::new();

    std::thread::scope(|scope| {
        for _ in 0..2 {
            scope.spawn(|| {
                for _ in 0..1_000 {
                    log.append(purchase_at(clock.now()));
                }
            });
        }
        scope.spawn(|| {
            let mut last = None;
            for _ in 0..1_000 {
                let stats = log.stats(TimeDelta::weeks(1), &clock);
                assert_eq!(stats.recent, stats.total, "snapshot as of {}", stats.as_of);
                if let Some((total, as_of)) = last {
                    assert!(stats.total >= total);
                    assert!(stats.as_of > as_of);
                }
                last = Some((stats.total, stats.as_of));
            }
        });
    });

    let stats = log.stats(TimeDelta::weeks(1), &clock);
    assert_eq!((stats.total, stats.recent), (2_000, 2_000));
}

// --- stats ---

#[test]
fn test_stats_on_empty_log_is_zero() {
    let log = InMemoryEventLog::new();
    let now = Utc::now();

    for window in [TimeDelta::minutes(6), TimeDelta::hours(1), TimeDelta::hours(168)] {
        let stats = log.stats(window, &FixedClock(now));
        assert_eq!((stats.total, stats.recent), (0, 0));
        assert_eq!(stats.as_of, now);
    }
}

#[test]
fn test_stats_counts_events_inside_window() {
    let now = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
    let log = InMemoryEventLog::new();
    for offset in [
        TimeDelta::hours(2),
        TimeDelta::minutes(30),
        TimeDelta::minutes(5),
        TimeDelta::zero(),
    ] {
        log.append(purchase_at(now - offset));
    }

    let hour = log.stats(TimeDelta::hours(1), &FixedClock(now));
    let ten_minutes = log.stats(TimeDelta::minutes(10), &FixedClock(now));

    assert_eq!((hour.total, hour.recent), (4, 3));
    assert_eq!((ten_minutes.total, ten_minutes.recent), (4, 2));
}

#[test]
fn test_stats_count_events_not_units() {
    let now = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
    let log = InMemoryEventLog::new();
    log.append(purchase(11, 5, now - TimeDelta::minutes(10)));
    log.append(purchase(12, 3, now - TimeDelta::minutes(20)));
    log.append(purchase(11, 40, now - TimeDelta::hours(2)));

    let stats = log.stats(TimeDelta::hours(1), &FixedClock(now));

    assert_eq!((stats.total, stats.recent), (3, 2));
}

#[test]
fn test_repeated_stats_without_appends_are_identical() {
    let now = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
    let log = InMemoryEventLog::new();
    log.append(purchase_at(now - TimeDelta::minutes(20)));
    log.append(purchase_at(now - TimeDelta::hours(3)));

    let first = log.stats(TimeDelta::hours(1), &FixedClock(now));
    let second = log.stats(TimeDelta::hours(1), &FixedClock(now));

    assert_eq!(first, second);
}
