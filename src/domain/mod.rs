pub mod explosion;
pub mod models;

pub use explosion::{explode_categories, filter_excluded};
pub use models::{Business, CategoryRating, Review};
