pub mod analysis;
pub mod fetch;
