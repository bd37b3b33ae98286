use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RankerError, Result};

/// Integer type used for every match metric
pub type CharCount = u32;

/// How much of the query lined up with the start of the rightmost path component
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PrefixMatch {
    /// First query character did not match the first character of the component
    #[default]
    None = 0,
    /// First character matched, but not every leading character did
    Partial = 1,
    /// Query matched a full leading prefix of the component
    Full = 2,
}

impl PrefixMatch {
    /// Numeric encoding used in diagnostics (NONE=0, PARTIAL=1, FULL=2)
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for PrefixMatch {
    type Error = RankerError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(PrefixMatch::None),
            1 => Ok(PrefixMatch::Partial),
            2 => Ok(PrefixMatch::Full),
            other => Err(RankerError::InvalidPrefixMatch(other)),
        }
    }
}

/// Quality metrics computed by the matching engine for one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MatchMetrics {
    /// Sum of right-counted indexes of every path component holding a match
    #[serde(default)]
    pub part_index_sum: CharCount,

    /// Components traversed between the reference path and the candidate
    #[serde(default)]
    pub path_distance: CharCount,

    /// Trailing unmatched characters in the rightmost component
    #[serde(default)]
    pub unmatched_len: CharCount,

    /// Consecutive matched characters from a word boundary in the rightmost component
    #[serde(default)]
    pub word_prefix_len: CharCount,

    #[serde(default)]
    pub prefix_match: PrefixMatch,
}

impl MatchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_part_index_sum(mut self, value: CharCount) -> Self {
        self.part_index_sum = value;
        self
    }

    pub fn with_path_distance(mut self, value: CharCount) -> Self {
        self.path_distance = value;
        self
    }

    pub fn with_unmatched_len(mut self, value: CharCount) -> Self {
        self.unmatched_len = value;
        self
    }

    pub fn with_word_prefix_len(mut self, value: CharCount) -> Self {
        self.word_prefix_len = value;
        self
    }

    pub fn with_prefix_match(mut self, value: PrefixMatch) -> Self {
        self.prefix_match = value;
        self
    }

    /// Human-readable rendering of every metric (for logging only)
    pub fn debug_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MatchMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "part_index_sum={}, path_distance={}, unmatched_len={}, word_prefix_len={}, prefix_match={}",
            self.part_index_sum,
            self.path_distance,
            self.unmatched_len,
            self.word_prefix_len,
            self.prefix_match.as_u8()
        )
    }
}

/// A scored candidate: the engine's metrics plus the candidate item it owns.
///
/// Records are immutable once built. Reordering a collection moves them,
/// and the item goes wherever the record goes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchRecord<T> {
    #[serde(flatten)]
    metrics: MatchMetrics,
    item: T,
}

impl<T> MatchRecord<T> {
    /// Create a record with default (all-zero, no prefix) metrics
    pub fn new(item: T) -> Self {
        Self::with_metrics(item, MatchMetrics::default())
    }

    pub fn with_metrics(item: T, metrics: MatchMetrics) -> Self {
        Self { metrics, item }
    }

    pub fn metrics(&self) -> &MatchMetrics {
        &self.metrics
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    /// Consume the record, handing its item to the caller
    pub fn into_item(self) -> T {
        self.item
    }

    pub fn part_index_sum(&self) -> CharCount {
        self.metrics.part_index_sum
    }

    pub fn path_distance(&self) -> CharCount {
        self.metrics.path_distance
    }

    pub fn unmatched_len(&self) -> CharCount {
        self.metrics.unmatched_len
    }

    pub fn word_prefix_len(&self) -> CharCount {
        self.metrics.word_prefix_len
    }

    pub fn prefix_match(&self) -> PrefixMatch {
        self.metrics.prefix_match
    }

    /// Human-readable rendering of the metrics (the item is not included)
    pub fn debug_string(&self) -> String {
        self.metrics.debug_string()
    }
}

impl<T: Serialize> MatchRecord<T> {
    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T: DeserializeOwned> MatchRecord<T> {
    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<T> fmt::Display for MatchRecord<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.metrics, f)
    }
}
