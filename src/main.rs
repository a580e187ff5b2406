use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use pokedex_cli::adapters::cache::memory_cache::ExpiringCache;
use pokedex_cli::adapters::fetch_through::CachedFetcher;
use pokedex_cli::adapters::http::{HttpFetcher, PokeApiEndpoints};
use pokedex_cli::config::load_config;
use pokedex_cli::domain::pokedex::RandomRoll;
use pokedex_cli::repl::{self, Session};

fn find_config_path() -> PathBuf {
    // Check common locations for config file
    let candidates = [
        PathBuf::from("pokedex.yaml"),
        binary_dir().join("pokedex.yaml"),
    ];

    for path in &candidates {
        if path.exists() {
            return path.clone();
        }
    }

    candidates[0].clone()
}

fn binary_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout belongs to the REPL
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config_path = find_config_path();
    let config = load_config(&config_path)?;
    tracing::info!(
        base_url = %config.api.base_url,
        ttl_secs = config.cache.ttl_secs,
        reap_interval_secs = config.cache.reap_interval_secs,
        "Starting pokedex"
    );

    let cache = Arc::new(ExpiringCache::new(Duration::from_secs(
        config.cache.ttl_secs,
    )));
    let reaper = cache.spawn_reaper(Duration::from_secs(config.cache.reap_interval_secs));

    let http = HttpFetcher::new(&config.http)?;
    let fetcher = CachedFetcher::new(Box::new(http), cache);
    let endpoints = PokeApiEndpoints::from_config(&config.api)?;
    let mut session = Session::new(Box::new(fetcher), endpoints, Box::new(RandomRoll))?;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    repl::run(&mut session, stdin, &mut stdout, &mut stderr).await?;

    reaper.shutdown().await;
    Ok(())
}
