use std::collections::HashMap;

use crate::domain::CategoryRating;

use super::types::CategoryStat;

/// Group exploded rows into one stat per distinct category, with the
/// contributing review count and arithmetic mean rating. Categories are
/// matched by exact string equality; rows arrive already trimmed.
pub fn aggregate_categories(rows: &[CategoryRating]) -> Vec<CategoryStat> {
    let accumulators = accumulate_by_category(rows);

    accumulators
        .into_iter()
        .map(|(category, (count, sum))| CategoryStat {
            category,
            review_count: count,
            mean_rating: sum / count as f64,
            smoothed_rating: None,
        })
        .collect()
}

/// Mean rating over every retained row, `None` when there are no rows
pub fn global_mean(rows: &[CategoryRating]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }

    let sum: f64 = rows.iter().map(|row| row.stars).sum();
    Some(sum / rows.len() as f64)
}

fn accumulate_by_category(rows: &[CategoryRating]) -> HashMap<String, (u64, f64)> {
    let mut accumulators: HashMap<String, (u64, f64)> = HashMap::new();

    for row in rows {
        let entry = accumulators.entry(row.category.clone()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += row.stars;
    }

    accumulators
}
