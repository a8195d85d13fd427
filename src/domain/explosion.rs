use std::collections::HashSet;

use super::models::CategoryRating;

/// Split a comma-separated category list into one trimmed row per element.
/// A list with N elements always yields exactly N rows, empty fragments
/// included.
pub fn explode_categories(categories: &str, stars: f64) -> Vec<CategoryRating> {
    categories
        .split(',')
        .map(|raw| build_row(raw, stars))
        .collect()
}

/// Drop rows whose category exactly matches an exclusion term.
/// Matching is case-sensitive; "sushi" does not exclude "Sushi".
pub fn filter_excluded(
    rows: Vec<CategoryRating>,
    exclusions: &HashSet<String>,
) -> Vec<CategoryRating> {
    rows.into_iter()
        .filter(|row| !exclusions.contains(&row.category))
        .collect()
}

fn build_row(raw: &str, stars: f64) -> CategoryRating {
    CategoryRating {
        category: raw.trim().to_string(),
        stars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exclusion_set(terms: &[&str]) -> HashSet<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_explode_yields_one_row_per_category() {
        let rows = explode_categories("Sushi Bars, Restaurants, Nightlife", 4.0);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].category, "Sushi Bars");
        assert_eq!(rows[1].category, "Restaurants");
        assert_eq!(rows[2].category, "Nightlife");
        assert!(rows.iter().all(|row| row.stars == 4.0));
    }

    #[test]
    fn test_explode_trims_surrounding_whitespace() {
        let rows = explode_categories("  Bars ,Bars", 5.0);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "Bars");
        assert_eq!(rows[1].category, "Bars");
    }

    #[test]
    fn test_explode_keeps_empty_fragments() {
        // "a,,b" has three comma-separated elements, so three rows
        let rows = explode_categories("a,,b", 3.0);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].category, "");
    }

    #[test]
    fn test_filter_removes_exact_matches() {
        let rows = explode_categories("Sushi Bars, Ethnicity1", 5.0);
        let excluded = exclusion_set(&["Ethnicity1"]);

        let kept = filter_excluded(rows, &excluded);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].category, "Sushi Bars");
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let rows = explode_categories("ethnicity1", 5.0);
        let excluded = exclusion_set(&["Ethnicity1"]);

        let kept = filter_excluded(rows, &excluded);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].category, "ethnicity1");
    }

    #[test]
    fn test_filter_matches_post_trim_category() {
        let rows = explode_categories(" Ethnicity1 ", 5.0);
        let excluded = exclusion_set(&["Ethnicity1"]);

        let kept = filter_excluded(rows, &excluded);

        assert!(kept.is_empty());
    }
}
