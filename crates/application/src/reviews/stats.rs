use std::collections::BTreeMap;

use super::dtos::RatingStatsDto;

#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;

/// Ratings are clamped into [1, 5] at write time rather than rejected;
/// out-of-range values can only arrive through hand-crafted payloads.
pub fn clamp_rating(value: f64) -> f64 {
    value.clamp(1.0, 5.0)
}

/// Aggregate statistics over a set of (already approval-filtered) rating
/// values: mean, count, and the share of ratings in each of the five
/// half-open buckets [i - 0.5, i + 0.5) centered on the integer stars.
pub fn rating_stats(ratings: &[f64]) -> RatingStatsDto {
    let count = ratings.len() as u64;
    let average = if count == 0 {
        0.0
    } else {
        ratings.iter().sum::<f64>() / count as f64
    };

    let mut percentages = BTreeMap::new();
    for star in 1..=5u8 {
        let low = f64::from(star) - 0.5;
        let high = f64::from(star) + 0.5;
        let in_bucket = ratings.iter().filter(|r| **r >= low && **r < high).count();
        let percentage = if count == 0 {
            0.0
        } else {
            round1(in_bucket as f64 / count as f64 * 100.0)
        };
        percentages.insert(star.to_string(), percentage);
    }

    RatingStatsDto {
        average,
        count,
        percentages,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
