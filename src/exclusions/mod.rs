pub mod client;

pub use client::ExclusionClient;
