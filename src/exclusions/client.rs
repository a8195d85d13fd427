use std::collections::HashSet;

use anyhow::Result;
use log::info;

use crate::cache::Cache;
use crate::config::settings::FetchSettings;
use crate::http::HttpClient;

const CACHE_KEY: &str = "exclusions";

/// Client for the externally hosted category exclusion list: a JSON array
/// of strings behind a single unauthenticated GET.
pub struct ExclusionClient {
    client: HttpClient,
    url: String,
}

impl ExclusionClient {
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        let client = HttpClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            client,
            url: settings.exclusion_url.to_string(),
        })
    }

    /// Fetch the exclusion list with a single GET, no retry
    pub async fn fetch(&self) -> Result<HashSet<String>> {
        info!("Fetching exclusion list from {}", self.url);

        let response = self.client.get(&self.url).await?;
        if !response.status().is_success() {
            anyhow::bail!("Exclusion list endpoint returned status: {}", response.status());
        }

        let terms: Vec<String> = response.json().await?;
        info!("Fetched {} exclusion terms", terms.len());
        Ok(terms.into_iter().collect())
    }

    /// Fetch the list and persist it to the cache
    pub async fn fetch_and_cache(&self, cache: &Cache) -> Result<HashSet<String>> {
        let terms = self.fetch().await?;
        cache.save(CACHE_KEY, &terms)?;
        Ok(terms)
    }

    /// Use the cached list when present, otherwise fetch live
    pub async fn load_or_fetch(&self, cache: &Cache) -> Result<HashSet<String>> {
        if let Some(terms) = cache.load::<HashSet<String>>(CACHE_KEY)? {
            info!("Loaded {} exclusion terms from cache", terms.len());
            return Ok(terms);
        }

        self.fetch().await
    }
}
