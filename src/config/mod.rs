pub mod types;

use std::path::Path;

use crate::adapters::cache::memory_cache::MAX_REAP_INTERVAL;
use crate::error::{PokedexError, Result};
use types::Config;

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        PokedexError::Config(format!(
            "failed to read config file {}: {e}",
            path.display()
        ))
    })?;
    let config: Config = serde_yml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.api.page_size == 0 {
        return Err(PokedexError::Config("api.page_size must be positive".into()));
    }
    if config.cache.reap_interval_secs == 0 {
        return Err(PokedexError::Config(
            "cache.reap_interval_secs must be positive".into(),
        ));
    }
    if config.cache.reap_interval_secs > MAX_REAP_INTERVAL.as_secs() {
        return Err(PokedexError::Config(format!(
            "cache.reap_interval_secs must be at most {}",
            MAX_REAP_INTERVAL.as_secs()
        )));
    }
    if config.http.request_timeout_secs == 0 {
        return Err(PokedexError::Config(
            "http.request_timeout_secs must be positive".into(),
        ));
    }
    url::Url::parse(&config.api.base_url)?;
    Ok(())
}
