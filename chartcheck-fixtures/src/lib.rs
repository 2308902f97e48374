pub mod error;
pub mod generator;
pub mod labels;
pub mod sampler;

pub use generator::{
    random_frequency_data, random_multi_series, random_single_series, FixtureGenerator,
    SeriesOptions,
};
pub use labels::random_labels;
pub use sampler::sample_count;
