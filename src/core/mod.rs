pub mod match_record;

pub use match_record::{CharCount, MatchMetrics, MatchRecord, PrefixMatch};
