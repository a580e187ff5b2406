use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::types::HttpConfig;
use crate::error::{PokedexError, Result};
use crate::ports::fetcher::Fetcher;

/// Fetches raw bodies over HTTP. One request per call, no retries.
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> std::result::Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "Fetching resource");

        let response = self.http.get(url).send().await.map_err(|e| {
            warn!(error = %e, url, "HTTP request failed");
            PokedexError::Network(e)
        })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            debug!(url, status = status.as_u16(), "Remote returned an error status");
            return Err(PokedexError::Remote {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(PokedexError::Network)?;
        Ok(body.to_vec())
    }
}
