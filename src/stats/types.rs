use serde::{Deserialize, Serialize};

pub type ReviewCount = u64;
pub type Rating = f64;

/// Aggregate rating statistics for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category: String,
    pub review_count: ReviewCount,
    pub mean_rating: Rating,
    /// Present only in the smoothed variant
    pub smoothed_rating: Option<Rating>,
}

impl CategoryStat {
    /// Value the ranking sorts by: smoothed when present, raw otherwise
    pub fn ranking_value(&self) -> Rating {
        self.smoothed_rating.unwrap_or(self.mean_rating)
    }
}
