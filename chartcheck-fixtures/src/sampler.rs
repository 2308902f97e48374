use rand::Rng;

use crate::error::FixtureError;

/// Sample an integer uniformly from `[min_count, max_count)`
pub fn sample_count<R: Rng + ?Sized>(
    rng: &mut R,
    min_count: i64,
    max_count: i64,
) -> Result<i64, FixtureError> {
    if max_count <= min_count {
        return Err(FixtureError::EmptyCountRange {
            min_count,
            max_count,
        });
    }
    Ok(rng.gen_range(min_count..max_count))
}
