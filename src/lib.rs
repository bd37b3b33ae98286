//! # Path Match Ranker
//!
//! Ranking and truncation for fuzzy path matches:
//! - `MatchRecord`: engine-computed quality metrics plus the owned candidate
//! - A five-key cascade comparator with a deterministic item tie-break
//! - Bounded top-K selection that avoids sorting the whole candidate set
//!
//! The matching engine that fills in the metrics lives elsewhere; this crate
//! only orders and trims what it produces.
//!
//! ## Example Usage
//!
//! ```rust
//! use path_match_ranker::{select_top_k, MatchMetrics, MatchRecord, PrefixMatch};
//!
//! let records = vec![
//!     MatchRecord::with_metrics("src/lib.rs", MatchMetrics::new().with_part_index_sum(1)),
//!     MatchRecord::with_metrics(
//!         "src/ranking/mod.rs",
//!         MatchMetrics::new().with_prefix_match(PrefixMatch::Full),
//!     ),
//!     MatchRecord::with_metrics("README.md", MatchMetrics::new().with_path_distance(4)),
//! ];
//!
//! let top = select_top_k(records, 2);
//! assert_eq!(top[0].item(), &"src/ranking/mod.rs");
//! assert_eq!(top[1].item(), &"README.md");
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod ranking;

// Re-export primary types
pub use crate::core::{CharCount, MatchMetrics, MatchRecord, PrefixMatch};
pub use config::SelectionOptions;
pub use error::{RankerError, Result};
pub use ranking::{
    compare_metrics, deciding_key, merge_top_k, select_top_k, select_top_k_by_metrics,
    sort_limit, sort_limit_by, Direction, RankKey, TopKSelector, RANK_KEYS,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
