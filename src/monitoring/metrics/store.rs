//! In-memory snapshot store

use super::bounded::{BoundedPush, MAX_SNAPSHOTS_PER_ENGINE};
use crate::monitoring::types::MetricsSnapshot;
use chrono::{DateTime, Duration, Utc};
use std::collections::{BTreeMap, HashMap, VecDeque};

/// Snapshot history per engine, oldest first
///
/// Snapshots are never mutated once inserted. The store is owned by the
/// monitoring service and guarded by its lock.
#[derive(Debug)]
pub struct MetricsStore {
    histories: HashMap<String, VecDeque<MetricsSnapshot>>,
    max_per_engine: usize,
}

impl Default for MetricsStore {
    fn default() -> Self {
        Self::new(MAX_SNAPSHOTS_PER_ENGINE)
    }
}

impl MetricsStore {
    /// Create a store keeping at most `max_per_engine` snapshots per engine
    pub fn new(max_per_engine: usize) -> Self {
        Self {
            histories: HashMap::new(),
            max_per_engine,
        }
    }

    /// Append a snapshot to its engine's history
    pub fn insert(&mut self, snapshot: MetricsSnapshot) {
        self.histories
            .entry(snapshot.engine_name.clone())
            .or_default()
            .push_bounded(snapshot, self.max_per_engine);
    }

    /// Most recent snapshot for an engine
    pub fn latest(&self, engine_name: &str) -> Option<&MetricsSnapshot> {
        self.histories.get(engine_name).and_then(VecDeque::back)
    }

    /// Most recent snapshot of every known engine
    pub fn latest_all(&self) -> BTreeMap<String, MetricsSnapshot> {
        self.histories
            .iter()
            .filter_map(|(name, history)| history.back().map(|s| (name.clone(), s.clone())))
            .collect()
    }

    /// Full history of one engine, oldest first
    pub fn history(&self, engine_name: &str) -> Vec<MetricsSnapshot> {
        self.histories
            .get(engine_name)
            .map(|history| history.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Every snapshot taken at or after `since`, ordered by time then engine
    pub fn snapshots_since(&self, since: DateTime<Utc>) -> Vec<MetricsSnapshot> {
        let mut snapshots: Vec<MetricsSnapshot> = self
            .histories
            .values()
            .flat_map(|history| history.iter().filter(|s| s.timestamp >= since).cloned())
            .collect();
        snapshots.sort_by(|a, b| {
            a.timestamp
                .cmp(&b.timestamp)
                .then_with(|| a.engine_name.cmp(&b.engine_name))
        });
        snapshots
    }

    /// Drop snapshots strictly older than `now - retention`
    ///
    /// Engines whose history becomes empty are forgotten. Returns the number of
    /// snapshots removed.
    pub fn clean_old_metrics(&mut self, retention: Duration, now: DateTime<Utc>) -> usize {
        let cutoff = now
            .checked_sub_signed(retention)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let before = self.len();

        for history in self.histories.values_mut() {
            history.retain(|snapshot| snapshot.timestamp >= cutoff);
        }
        self.histories.retain(|_, history| !history.is_empty());

        before - self.len()
    }

    /// Total number of stored snapshots
    pub fn len(&self) -> usize {
        self.histories.values().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.histories.values().all(VecDeque::is_empty)
    }

    /// Number of engines with at least one snapshot
    pub fn engine_count(&self) -> usize {
        self.histories.len()
    }
}
