use chartcheck_schema::types::{
    FrequencyDataset, MultiSeriesDataset, MultiSeriesElement, SingleSeriesDataset,
    SingleSeriesElement,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::error::FixtureError;
use crate::labels::random_labels_with_rng;
use crate::sampler::sample_count;

pub const DEFAULT_NUMBER: usize = 5;
pub const DEFAULT_MAX_COUNT: i64 = 10000;
pub const DEFAULT_MIN_COUNT: i64 = 500;

/// Largest magnitude an `f64` holds without losing integer precision (2^53)
pub const MAX_EXACT_FREQUENCY: i64 = 1 << 53;

/// Size and count range of a generated series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeriesOptions {
    /// Number of categories
    pub number: usize,
    /// Exclusive upper bound of every count
    pub max_count: i64,
    /// Inclusive lower bound of every count
    pub min_count: i64,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            number: DEFAULT_NUMBER,
            max_count: DEFAULT_MAX_COUNT,
            min_count: DEFAULT_MIN_COUNT,
        }
    }
}

impl SeriesOptions {
    pub fn new(number: usize, max_count: i64, min_count: i64) -> Self {
        Self {
            number,
            max_count,
            min_count,
        }
    }

    fn check_range(&self) -> Result<(), FixtureError> {
        if self.max_count <= self.min_count {
            return Err(FixtureError::EmptyCountRange {
                min_count: self.min_count,
                max_count: self.max_count,
            });
        }
        Ok(())
    }
}

/// Produces random chart datasets from a caller supplied random source.
///
/// Seeding the source with [`FixtureGenerator::seeded`] makes fixtures
/// reproducible.
#[derive(Debug, Clone)]
pub struct FixtureGenerator<R: Rng = StdRng> {
    rng: R,
}

impl FixtureGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> FixtureGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn labels(&mut self, number: usize) -> Vec<&'static str> {
        random_labels_with_rng(&mut self.rng, number)
    }

    pub fn count(&mut self, min_count: i64, max_count: i64) -> Result<i64, FixtureError> {
        sample_count(&mut self.rng, min_count, max_count)
    }

    /// Distinct pool labels, each paired with a count in
    /// `[min_count, max_count)`. Requesting zero categories yields an empty
    /// dataset, which does not pass single-series validation.
    pub fn single_series(
        &mut self,
        options: &SeriesOptions,
    ) -> Result<SingleSeriesDataset, FixtureError> {
        options.check_range()?;
        log::debug!(
            "Generating {} single-series elements with counts in [{}, {})",
            options.number,
            options.min_count,
            options.max_count
        );
        self.labels(options.number)
            .into_iter()
            .map(|label| {
                let count = self.count(options.min_count, options.max_count)?;
                Ok(SingleSeriesElement::new(label, count))
            })
            .collect()
    }

    /// `series` labeled series, each with its own random parts
    pub fn multi_series(
        &mut self,
        series: usize,
        options: &SeriesOptions,
    ) -> Result<MultiSeriesDataset, FixtureError> {
        options.check_range()?;
        self.labels(series)
            .into_iter()
            .map(|label| {
                Ok(MultiSeriesElement {
                    label: label.to_string(),
                    parts: self.single_series(options)?,
                })
            })
            .collect()
    }

    /// `number` integral observations in `[min_count, max_count)`. Both bounds
    /// must lie within [`MAX_EXACT_FREQUENCY`] so every value is exact.
    pub fn frequency_data(
        &mut self,
        number: usize,
        max_count: i64,
        min_count: i64,
    ) -> Result<FrequencyDataset, FixtureError> {
        SeriesOptions::new(number, max_count, min_count).check_range()?;
        if min_count < -MAX_EXACT_FREQUENCY || max_count > MAX_EXACT_FREQUENCY {
            return Err(FixtureError::InexactFrequencyRange {
                min_count,
                max_count,
                limit: MAX_EXACT_FREQUENCY,
            });
        }
        (0..number)
            .map(|_| Ok(self.count(min_count, max_count)? as f64))
            .collect()
    }
}

pub fn random_single_series(
    number: usize,
    max_count: i64,
    min_count: i64,
) -> Result<SingleSeriesDataset, FixtureError> {
    FixtureGenerator::new(rand::thread_rng())
        .single_series(&SeriesOptions::new(number, max_count, min_count))
}

pub fn random_multi_series(
    series: usize,
    options: &SeriesOptions,
) -> Result<MultiSeriesDataset, FixtureError> {
    FixtureGenerator::new(rand::thread_rng()).multi_series(series, options)
}

pub fn random_frequency_data(
    number: usize,
    max_count: i64,
    min_count: i64,
) -> Result<FrequencyDataset, FixtureError> {
    FixtureGenerator::new(rand::thread_rng()).frequency_data(number, max_count, min_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = SeriesOptions::default();
        assert_eq!(options, SeriesOptions::new(5, 10000, 500));
    }

    #[test]
    fn test_seeded_generators_repeat() -> Result<(), FixtureError> {
        let options = SeriesOptions::default();
        let first = FixtureGenerator::seeded(99).single_series(&options)?;
        let second = FixtureGenerator::seeded(99).single_series(&options)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_zero_number_is_empty() -> Result<(), FixtureError> {
        let dataset = FixtureGenerator::seeded(0).single_series(&SeriesOptions::new(0, 10, 1))?;
        assert!(dataset.is_empty());
        Ok(())
    }

    #[test]
    fn test_bad_range_fails_even_without_elements() {
        let err = FixtureGenerator::seeded(0)
            .single_series(&SeriesOptions::new(0, 1, 10))
            .unwrap_err();
        assert_eq!(
            err,
            FixtureError::EmptyCountRange {
                min_count: 10,
                max_count: 1
            }
        );
    }

    #[test]
    fn test_frequency_range_must_be_exact() {
        let mut generator = FixtureGenerator::seeded(0);
        assert!(generator
            .frequency_data(3, MAX_EXACT_FREQUENCY, MAX_EXACT_FREQUENCY - 10)
            .is_ok());
        assert_eq!(
            generator.frequency_data(3, MAX_EXACT_FREQUENCY + 1, 0),
            Err(FixtureError::InexactFrequencyRange {
                min_count: 0,
                max_count: MAX_EXACT_FREQUENCY + 1,
                limit: MAX_EXACT_FREQUENCY,
            })
        );
        assert!(generator
            .frequency_data(3, 0, -MAX_EXACT_FREQUENCY - 1)
            .is_err());
    }

    #[test]
    fn test_multi_series_parts_sizes() -> Result<(), FixtureError> {
        let dataset = FixtureGenerator::seeded(3).multi_series(4, &SeriesOptions::new(6, 20, 10))?;
        assert_eq!(dataset.len(), 4);
        assert!(dataset.iter().all(|series| series.parts.len() == 6));
        Ok(())
    }
}
