//! Match quality ordering.
//!
//! Matches are ordered best-first: `a < b` means `a` is the better match, so
//! an ascending sort puts the best candidates at the front. The cascade of
//! keys lives in [`RANK_KEYS`]; each key is only consulted when every earlier
//! key ties.

pub mod selector;

use std::cmp::Ordering;

use crate::core::{CharCount, MatchMetrics, MatchRecord};

pub use selector::{
    merge_top_k, select_top_k, select_top_k_by_metrics, sort_limit, sort_limit_by, TopKSelector,
};

/// Which way a metric has to move for a match to improve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// One step of the ranking cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankKey {
    PrefixMatch,
    WordPrefixLen,
    PartIndexSum,
    PathDistance,
    UnmatchedLen,
}

/// Ranking cascade, most significant key first
pub const RANK_KEYS: [RankKey; 5] = [
    RankKey::PrefixMatch,
    RankKey::WordPrefixLen,
    RankKey::PartIndexSum,
    RankKey::PathDistance,
    RankKey::UnmatchedLen,
];

impl RankKey {
    pub fn direction(self) -> Direction {
        match self {
            RankKey::PrefixMatch | RankKey::WordPrefixLen => Direction::HigherIsBetter,
            RankKey::PartIndexSum | RankKey::PathDistance | RankKey::UnmatchedLen => {
                Direction::LowerIsBetter
            }
        }
    }

    /// Extract this key's raw value from a metric set
    pub fn value(self, metrics: &MatchMetrics) -> CharCount {
        match self {
            RankKey::PrefixMatch => CharCount::from(metrics.prefix_match.as_u8()),
            RankKey::WordPrefixLen => metrics.word_prefix_len,
            RankKey::PartIndexSum => metrics.part_index_sum,
            RankKey::PathDistance => metrics.path_distance,
            RankKey::UnmatchedLen => metrics.unmatched_len,
        }
    }

    /// Field name, as used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            RankKey::PrefixMatch => "prefix_match",
            RankKey::WordPrefixLen => "word_prefix_len",
            RankKey::PartIndexSum => "part_index_sum",
            RankKey::PathDistance => "path_distance",
            RankKey::UnmatchedLen => "unmatched_len",
        }
    }

    /// Compare on this key alone. `Less` means `a` is better.
    pub fn compare(self, a: &MatchMetrics, b: &MatchMetrics) -> Ordering {
        let (va, vb) = (self.value(a), self.value(b));
        match self.direction() {
            Direction::HigherIsBetter => vb.cmp(&va),
            Direction::LowerIsBetter => va.cmp(&vb),
        }
    }
}

/// Compare two metric sets through the full cascade. `Less` means `a` is better.
pub fn compare_metrics(a: &MatchMetrics, b: &MatchMetrics) -> Ordering {
    RANK_KEYS
        .iter()
        .map(|key| key.compare(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// First key of the cascade on which `a` and `b` differ, if any
pub fn deciding_key(a: &MatchMetrics, b: &MatchMetrics) -> Option<RankKey> {
    RANK_KEYS
        .iter()
        .copied()
        .find(|key| key.compare(a, b).is_ne())
}

impl PartialOrd for MatchMetrics {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MatchMetrics {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_metrics(self, other)
    }
}

impl<T: Ord> PartialOrd for MatchRecord<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Metrics first, then the item's own order so fully tied metrics still
/// sort reproducibly.
impl<T: Ord> Ord for MatchRecord<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_metrics(self.metrics(), other.metrics()).then_with(|| self.item().cmp(other.item()))
    }
}
