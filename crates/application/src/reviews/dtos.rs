use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct SubmitReviewRequest {
    /// Not range-validated: out-of-range values are clamped into [1, 5] at
    /// write time instead of rejected.
    pub rating: f64,
    #[serde(default)]
    #[validate(length(max = 2000, message = "Comment must be at most 2000 characters"))]
    pub comment: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewDto {
    pub rating: f64,
    pub comment: Option<String>,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitReviewResponse {
    pub rating: f64,
    pub comment: Option<String>,
    pub is_approved: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RatingStatsDto {
    pub average: f64,
    pub count: u64,
    /// Percentage of approved ratings falling in each star bucket, keyed
    /// "1" through "5".
    pub percentages: BTreeMap<String, f64>,
}
