pub mod aggregation;
pub mod ranking;
pub mod smoothing;
pub mod types;

pub use aggregation::{aggregate_categories, global_mean};
pub use ranking::{bottom_slice, filter_min_support, rank_descending, top_slice};
pub use smoothing::{apply_smoothing, smooth_mean};
pub use types::CategoryStat;

use std::collections::{HashMap, HashSet};

use anyhow::Result;

use crate::config::settings::AnalysisSettings;
use crate::domain::{self, Business, CategoryRating, Review};

/// Result of one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Mean rating over all retained exploded rows, computed after
    /// exclusion filtering and before any minimum-support filtering
    pub global_mean: f64,
    /// Ranked descending by the chosen value
    pub stats: Vec<CategoryStat>,
    pub smoothed: bool,
}

/// Pure analysis pipeline over explicit inputs: join reviews to in-region
/// businesses, explode and filter categories, aggregate, then either apply
/// the minimum-support filter (raw variant) or bayesian smoothing.
pub fn analyze_reviews(
    businesses: &[Business],
    reviews: &[Review],
    exclusions: &HashSet<String>,
    settings: &AnalysisSettings,
    smoothed: bool,
) -> Result<AnalysisReport> {
    let rows = explode_region_reviews(businesses, reviews, exclusions, settings.region);

    let global = global_mean(&rows)
        .ok_or_else(|| anyhow::anyhow!("No reviews matched region {}", settings.region))?;

    let mut stats = aggregate_categories(&rows);

    if smoothed {
        apply_smoothing(&mut stats, global, settings.smoothing_constant);
    } else {
        stats = filter_min_support(stats, settings.min_review_support);
    }

    rank_descending(&mut stats);

    Ok(AnalysisReport {
        global_mean: global,
        stats,
        smoothed,
    })
}

/// Inner-join reviews to in-region businesses and explode their category
/// lists, dropping businesses whose category field is null and rows that
/// match the exclusion set. A review tagged with N categories contributes
/// N rows, so categories that co-occur with many others see more rows.
fn explode_region_reviews(
    businesses: &[Business],
    reviews: &[Review],
    exclusions: &HashSet<String>,
    region: &str,
) -> Vec<CategoryRating> {
    let region_categories: HashMap<&str, &str> = businesses
        .iter()
        .filter(|business| business.state == region)
        .filter_map(|business| {
            business
                .categories
                .as_deref()
                .map(|categories| (business.business_id.as_str(), categories))
        })
        .collect();

    let mut rows = Vec::new();
    for review in reviews {
        if let Some(categories) = region_categories.get(review.business_id.as_str()) {
            let exploded = domain::explode_categories(categories, review.stars);
            rows.extend(domain::filter_excluded(exploded, exclusions));
        }
    }

    rows
}
