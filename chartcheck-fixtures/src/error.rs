#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixtureError {
    #[error("Count range is empty: max count ({max_count}) must be greater than min count ({min_count})")]
    EmptyCountRange { min_count: i64, max_count: i64 },

    #[error("Frequency values must lie within ±{limit} to be exact, got range [{min_count}, {max_count})")]
    InexactFrequencyRange {
        min_count: i64,
        max_count: i64,
        limit: i64,
    },
}
