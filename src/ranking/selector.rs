use std::cmp::Ordering;

use crate::config::SelectionOptions;
use crate::core::MatchRecord;
use crate::ranking::compare_metrics;

/// Sort `vec` best-first with `compare` and keep at most `limit` entries.
///
/// A `limit` of 0 means no limit. When the limit is smaller than the
/// collection, the best `limit` entries are partitioned to the front, the
/// rest are dropped, and only the kept prefix is sorted.
pub fn sort_limit_by<T, F>(vec: &mut Vec<T>, limit: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let total = vec.len();

    if limit > 0 && limit < total {
        vec.select_nth_unstable_by(limit - 1, &mut compare);
        vec.truncate(limit);
        vec.sort_unstable_by(&mut compare);
        tracing::debug!("Bounded selection kept {} of {} records", limit, total);
    } else {
        vec.sort_unstable_by(&mut compare);
        tracing::debug!("Full sort of {} records (limit {})", total, limit);
    }
}

/// [`sort_limit_by`] using the element's own order
pub fn sort_limit<T: Ord>(vec: &mut Vec<T>, limit: usize) {
    sort_limit_by(vec, limit, T::cmp);
}

/// Return the best `min(k, records.len())` records, best first. `k == 0`
/// returns every record, sorted.
pub fn select_top_k<T: Ord>(mut records: Vec<MatchRecord<T>>, k: usize) -> Vec<MatchRecord<T>> {
    sort_limit(&mut records, k);
    records
}

/// Like [`select_top_k`] for items with no total order.
///
/// Records that tie on every metric come out in unspecified order.
pub fn select_top_k_by_metrics<T>(mut records: Vec<MatchRecord<T>>, k: usize) -> Vec<MatchRecord<T>> {
    sort_limit_by(&mut records, k, |a, b| compare_metrics(a.metrics(), b.metrics()));
    records
}

/// Merge per-shard top-K sequences into one top-K sequence
pub fn merge_top_k<T, I>(shards: I, k: usize) -> Vec<MatchRecord<T>>
where
    T: Ord,
    I: IntoIterator<Item = Vec<MatchRecord<T>>>,
{
    let mut shard_count = 0usize;
    let mut merged = Vec::new();
    for mut shard in shards {
        shard_count += 1;
        merged.append(&mut shard);
    }
    tracing::debug!("Merging {} records from {} shards", merged.len(), shard_count);

    select_top_k(merged, k)
}

/// Reusable top-K selector with a fixed limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TopKSelector {
    limit: usize,
}

impl TopKSelector {
    /// Create a selector keeping at most `limit` records (0 = unlimited)
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn from_options(options: &SelectionOptions) -> Self {
        Self::new(options.limit)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn select<T: Ord>(&self, records: Vec<MatchRecord<T>>) -> Vec<MatchRecord<T>> {
        select_top_k(records, self.limit)
    }

    pub fn merge<T, I>(&self, shards: I) -> Vec<MatchRecord<T>>
    where
        T: Ord,
        I: IntoIterator<Item = Vec<MatchRecord<T>>>,
    {
        merge_top_k(shards, self.limit)
    }
}
