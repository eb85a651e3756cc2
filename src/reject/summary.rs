//! Ranked, immutable view over aggregated rejection counts.

use super::types::RejectionCount;
use serde::Serialize;
use std::collections::HashSet;

/// Statistics over a finalized set of rejection counts.
///
/// Entries are sorted by count, highest first. Members with equal counts keep
/// the order they were handed in (first-seen order when built by an
/// [`Aggregator`](super::Aggregator)), so identical input always produces
/// identical rankings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    entries: Vec<RejectionCount>,
    total: u64,
}

impl Summary {
    /// Sorts `entries` and precomputes the total.
    pub fn new(mut entries: Vec<RejectionCount>) -> Self {
        // sort_by is stable
        entries.sort_by(|a, b| b.count().cmp(&a.count()));
        let total = sum_counts(&entries);
        Self { entries, total }
    }

    /// Number of rejected records across all members
    pub const fn total_count(&self) -> u64 {
        self.total
    }

    /// Number of distinct members that caused a rejection
    pub fn unique_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` most rejected members.
    ///
    /// Asking for more entries than exist returns all of them; `n == 0`
    /// returns an empty slice.
    pub fn top_n(&self, n: usize) -> &[RejectionCount] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Fraction of all rejected records caused by the top `n` members.
    ///
    /// Returns a value between 0.0 and 1.0, and 0.0 when nothing was rejected.
    pub fn concentration_ratio(&self, n: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        sum_counts(self.top_n(n)) as f64 / self.total as f64
    }

    /// Distinct member names, irrespective of count
    pub fn member_identifiers(&self) -> HashSet<&str> {
        self.entries.iter().map(RejectionCount::member).collect()
    }

    /// All entries, most rejected first
    pub fn entries(&self) -> &[RejectionCount] {
        &self.entries
    }

    pub fn count_of(&self, member: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.member() == member)
            .map(RejectionCount::count)
    }
}

fn sum_counts(entries: &[RejectionCount]) -> u64 {
    entries.iter().map(RejectionCount::count).sum()
}
