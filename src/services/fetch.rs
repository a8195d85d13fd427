use anyhow::Result;
use log::info;

use crate::cache::Cache;
use crate::config::settings::AppConfig;
use crate::exclusions::ExclusionClient;

/// Downloads the category exclusion list and stores it in the local cache
/// so that analysis runs can work offline.
pub struct FetchService {
    config: AppConfig,
    cache: Cache,
}

impl FetchService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let cache = Cache::new(config.data.cache_dir)?;
        Ok(Self { config, cache })
    }

    pub async fn run(&self) -> Result<()> {
        info!("=== Starting Exclusion List Fetch ===\n");

        let client = ExclusionClient::new(&self.config.fetch)?;
        let terms = client.fetch_and_cache(&self.cache).await?;
        info!("  → Cached {} exclusion terms\n", terms.len());

        info!("=== Fetch Complete ===");
        Ok(())
    }
}
