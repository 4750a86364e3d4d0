//! Shared test utilities for allocator tests

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicI64, Ordering};

use parking_lot::Mutex;

use crate::Clock;

/// 1 ms after the default epoch
pub const EPOCH_PLUS_ONE: i64 = 1420041600001;

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(now: i64) -> Self {
        Self {
            now: AtomicI64::new(now),
        }
    }

    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, ms: i64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Clock that replays readings in order, then repeats the final one
#[derive(Debug)]
pub struct ScriptedClock {
    readings: Mutex<VecDeque<i64>>,
    last: AtomicI64,
    reads: AtomicI64,
}

impl ScriptedClock {
    pub fn new(readings: impl IntoIterator<Item = i64>) -> Self {
        let readings: VecDeque<i64> = readings.into_iter().collect();
        let last = readings.back().copied().unwrap_or(0);
        Self {
            readings: Mutex::new(readings),
            last: AtomicI64::new(last),
            reads: AtomicI64::new(0),
        }
    }

    /// Number of times the clock has been read
    pub fn reads(&self) -> i64 {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Clock for ScriptedClock {
    fn now_millis(&self) -> i64 {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.readings
            .lock()
            .pop_front()
            .unwrap_or_else(|| self.last.load(Ordering::SeqCst))
    }
}

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[i64], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert that IDs are strictly increasing in the order given
pub fn assert_ids_increasing(ids: &[i64]) {
    for pair in ids.windows(2) {
        assert!(
            pair[1] > pair[0],
            "ID {} is not greater than previous ID {}",
            pair[1],
            pair[0]
        );
    }
}

/// Assert collection has expected unique count and sorts into a strictly increasing run
pub fn assert_unique_and_monotonic(mut ids: Vec<i64>, expected_count: usize) {
    assert_unique_ids(&ids, expected_count);
    ids.sort_unstable();
    assert_ids_increasing(&ids);
}
