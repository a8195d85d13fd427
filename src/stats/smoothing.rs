use super::types::CategoryStat;

/// Shrink a per-category mean toward the global mean, weighted by a fixed
/// pseudo-count:
///
///   smoothed = (C * G + n * m) / (C + n)
///
/// At n = 0 the estimate equals the global mean; as n grows it converges to
/// the raw mean, with the gap shrinking as C / (C + n).
pub fn smooth_mean(raw_mean: f64, review_count: u64, global_mean: f64, pseudo_count: f64) -> f64 {
    let n = review_count as f64;
    (pseudo_count * global_mean + n * raw_mean) / (pseudo_count + n)
}

/// Attach a smoothed mean to every stat. No minimum-support filter applies
/// in this variant; small categories are pulled toward the global mean
/// instead of being dropped.
pub fn apply_smoothing(stats: &mut [CategoryStat], global_mean: f64, pseudo_count: f64) {
    for stat in stats.iter_mut() {
        stat.smoothed_rating = Some(smooth_mean(
            stat.mean_rating,
            stat.review_count,
            global_mean,
            pseudo_count,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_count_yields_the_global_mean_exactly() {
        assert_eq!(smooth_mean(1.0, 0, 3.8, 100.0), 3.8);
        assert_eq!(smooth_mean(5.0, 0, 3.8, 100.0), 3.8);
    }

    #[test]
    fn test_large_counts_converge_to_the_raw_mean() {
        let raw = 5.0;
        let global = 3.8;
        let pseudo = 100.0;

        for &n in &[1_000u64, 10_000, 100_000] {
            let smoothed = smooth_mean(raw, n, global, pseudo);
            let bound = pseudo / (pseudo + n as f64) * (raw - global).abs();

            assert!((smoothed - raw).abs() <= bound + 1e-12);
        }

        let far = smooth_mean(raw, 1_000, global, pseudo);
        let near = smooth_mean(raw, 100_000, global, pseudo);
        assert!((near - raw).abs() < (far - raw).abs());
    }

    #[test]
    fn test_apply_smoothing_fills_every_stat() {
        let mut stats = vec![
            CategoryStat {
                category: "Tiny".to_string(),
                review_count: 1,
                mean_rating: 5.0,
                smoothed_rating: None,
            },
            CategoryStat {
                category: "Big".to_string(),
                review_count: 10_000,
                mean_rating: 5.0,
                smoothed_rating: None,
            },
        ];

        apply_smoothing(&mut stats, 3.8, 100.0);

        let tiny = stats[0].smoothed_rating.unwrap();
        let big = stats[1].smoothed_rating.unwrap();

        // One review barely moves the estimate off the global mean
        assert!((tiny - 3.8).abs() < 0.02);
        assert!((big - 5.0).abs() < 0.02);
    }
}
