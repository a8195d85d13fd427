use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Business record from the business NDJSON dataset.
/// Unknown fields in the dataset are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub business_id: String,
    pub state: String,
    /// Free-text comma-separated category list; null when untagged
    pub categories: Option<String>,
}

/// Review record from the review NDJSON dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub review_id: String,
    pub business_id: String,
    /// Rating on the 1-5 star scale
    pub stars: f64,
    #[serde(default)]
    pub text: String,
    #[serde(deserialize_with = "deserialize_review_date")]
    pub date: NaiveDateTime,
}

/// One exploded (category, rating) row. A review tagged with N categories
/// contributes one row per category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRating {
    pub category: String,
    pub stars: f64,
}

fn deserialize_review_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S").map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_deserializes_dataset_date_format() {
        let line = r#"{"review_id":"r1","business_id":"b1","stars":4.0,"text":"ok","date":"2018-07-07 22:09:11"}"#;
        let review: Review = serde_json::from_str(line).unwrap();

        assert_eq!(review.business_id, "b1");
        assert_eq!(review.stars, 4.0);
        assert_eq!(review.date.to_string(), "2018-07-07 22:09:11");
    }

    #[test]
    fn test_business_categories_may_be_null() {
        let line = r#"{"business_id":"b1","state":"CA","categories":null,"name":"ignored"}"#;
        let business: Business = serde_json::from_str(line).unwrap();

        assert_eq!(business.state, "CA");
        assert!(business.categories.is_none());
    }
}
