use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::ports::cache::ResponseCache;
use crate::ports::fetcher::Fetcher;

/// Serves fetches from the cache when possible, falling back to the inner
/// fetcher and populating the cache on success.
///
/// A hit is returned whatever the entry's age. Failures are never cached.
pub struct CachedFetcher {
    inner: Box<dyn Fetcher>,
    cache: Arc<dyn ResponseCache>,
}

impl CachedFetcher {
    pub fn new(inner: Box<dyn Fetcher>, cache: Arc<dyn ResponseCache>) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl Fetcher for CachedFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(cached) = self.cache.get(url) {
            debug!(url, "Cache hit");
            return Ok(cached);
        }

        debug!(url, "Cache miss");
        let body = self.inner.fetch(url).await?;
        self.cache.add(url, body.clone());
        Ok(body)
    }
}
