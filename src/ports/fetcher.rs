use async_trait::async_trait;

use crate::error::Result;

/// A source of raw response bodies addressed by absolute URL.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
