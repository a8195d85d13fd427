use super::types::CategoryStat;

/// Drop categories with fewer contributing reviews than the threshold.
/// The boundary is inclusive: a category with exactly the threshold count
/// is retained.
pub fn filter_min_support(stats: Vec<CategoryStat>, min_reviews: u64) -> Vec<CategoryStat> {
    stats
        .into_iter()
        .filter(|stat| stat.review_count >= min_reviews)
        .collect()
}

/// Sort descending by ranking value. Ties break by category name so the
/// output order is deterministic.
pub fn rank_descending(stats: &mut [CategoryStat]) {
    stats.sort_by(|a, b| {
        b.ranking_value()
            .total_cmp(&a.ranking_value())
            .then_with(|| a.category.cmp(&b.category))
    });
}

/// First `n` entries of a ranked slice, best first
pub fn top_slice(stats: &[CategoryStat], n: usize) -> &[CategoryStat] {
    &stats[..stats.len().min(n)]
}

/// Last `n` entries of a ranked slice, worst first
pub fn bottom_slice(stats: &[CategoryStat], n: usize) -> Vec<CategoryStat> {
    let mut bottom: Vec<CategoryStat> = stats[stats.len().saturating_sub(n)..].to_vec();
    bottom.reverse();
    bottom
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(category: &str, review_count: u64, mean_rating: f64) -> CategoryStat {
        CategoryStat {
            category: category.to_string(),
            review_count,
            mean_rating,
            smoothed_rating: None,
        }
    }

    #[test]
    fn test_min_support_boundary_is_inclusive() {
        let stats = vec![stat("Almost", 99, 4.5), stat("Enough", 100, 4.0)];

        let kept = filter_min_support(stats, 100);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].category, "Enough");
    }

    #[test]
    fn test_rank_descending_by_mean() {
        let mut stats = vec![
            stat("Mid", 10, 3.0),
            stat("Best", 10, 5.0),
            stat("Worst", 10, 1.0),
        ];

        rank_descending(&mut stats);

        let order: Vec<&str> = stats.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(order, vec!["Best", "Mid", "Worst"]);
    }

    #[test]
    fn test_rank_prefers_smoothed_value_when_present() {
        let mut low_raw_high_smoothed = stat("Shrunk", 1, 1.0);
        low_raw_high_smoothed.smoothed_rating = Some(3.9);
        let mut stats = vec![stat("Plain", 200, 3.5), low_raw_high_smoothed];

        rank_descending(&mut stats);

        assert_eq!(stats[0].category, "Shrunk");
    }

    #[test]
    fn test_ties_break_by_category_name() {
        let mut stats = vec![stat("Zeta", 10, 4.0), stat("Alpha", 10, 4.0)];

        rank_descending(&mut stats);

        assert_eq!(stats[0].category, "Alpha");
    }

    #[test]
    fn test_top_and_bottom_slices() {
        let mut stats = vec![
            stat("A", 10, 5.0),
            stat("B", 10, 4.0),
            stat("C", 10, 3.0),
            stat("D", 10, 2.0),
        ];
        rank_descending(&mut stats);

        let top = top_slice(&stats, 2);
        assert_eq!(top[0].category, "A");
        assert_eq!(top[1].category, "B");

        let bottom = bottom_slice(&stats, 2);
        assert_eq!(bottom[0].category, "D");
        assert_eq!(bottom[1].category, "C");
    }

    #[test]
    fn test_slices_tolerate_short_input() {
        let stats = vec![stat("Only", 10, 4.0)];

        assert_eq!(top_slice(&stats, 50).len(), 1);
        assert_eq!(bottom_slice(&stats, 50).len(), 1);
    }
}
