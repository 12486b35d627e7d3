//! Weighted bucket selection.
//!
//! A percentage table is an ordered sequence of weights in `0..=100`. The
//! final bucket's weight may be left implied: `[38, 33, 19, 9]` behaves as
//! `[38, 33, 19, 9, 1]`, with the implied bucket reported as the table
//! length. Selection maps a uniform byte onto the table, so over uniform
//! seeds each bucket's long-run frequency tracks its weight to within the
//! ~1/255 discretization of the byte domain.

use crate::error::SeedbrushError;
use crate::seed::Seed;

/// Select a bucket index from a uniform byte.
///
/// The table is scanned once, front to back, against a remaining-percent
/// accumulator. An entry larger than the remainder means the table sums
/// past 100 and fails with [`SeedbrushError::PercentagesGreaterThan100`];
/// entries beyond the bucket where the byte lands are never inspected, so
/// a byte resolved by a valid prefix never trips on a bad tail.
pub fn bucket_index(random: u8, percentages: &[u8]) -> Result<usize, SeedbrushError> {
    let mut remaining: u32 = 100;
    for (index, &weight) in percentages.iter().enumerate() {
        let weight = u32::from(weight);
        if weight > remaining {
            return Err(SeedbrushError::PercentagesGreaterThan100);
        }
        remaining -= weight;
        if u32::from(random) > remaining * 255 / 100 {
            return Ok(index);
        }
    }
    Ok(percentages.len())
}

/// Select a bucket using the low-order byte of `seed`.
pub fn select_bucket(seed: &Seed, percentages: &[u8]) -> Result<usize, SeedbrushError> {
    bucket_index(seed.low_byte(), percentages)
}
