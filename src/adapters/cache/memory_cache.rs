use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::ports::cache::ResponseCache;

/// Longest period the reaper accepts. Longer intervals are clamped to it.
pub const MAX_REAP_INTERVAL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

struct CacheEntry {
    value: Vec<u8>,
    created_at: Instant,
}

/// In-memory response cache with age-based expiry.
///
/// Reads never look at an entry's age. Expired entries are only removed by
/// [`ExpiringCache::reap`], normally driven by the task started with
/// [`ExpiringCache::spawn_reaper`], so an entry can outlive its TTL by up to
/// one reap interval.
pub struct ExpiringCache {
    inner: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl ExpiringCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Run one reap cycle, returning the number of entries removed.
    ///
    /// An entry whose age has reached the TTL is removed.
    pub fn reap(&self) -> usize {
        let Ok(mut cache) = self.inner.lock() else {
            tracing::error!("Cache lock poisoned during reap, skipping cycle");
            return 0;
        };
        let now = Instant::now();
        let before = cache.len();
        cache.retain(|_, entry| now.duration_since(entry.created_at) < self.ttl);
        before - cache.len()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map_or(0, |cache| cache.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start the background reaper, ticking every `interval`.
    ///
    /// The first reap happens one full interval after this call. The interval
    /// is clamped to [`MAX_REAP_INTERVAL`]. Must be called from within a
    /// tokio runtime.
    pub fn spawn_reaper(self: &Arc<Self>, interval: Duration) -> ReaperHandle {
        let interval = interval.min(MAX_REAP_INTERVAL);
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let cache = Arc::clone(self);
        let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);

        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let removed = cache.reap();
                        if removed > 0 {
                            tracing::info!(removed, remaining = cache.len(), "Reaped expired cache entries");
                        }
                    }
                    _ = shutdown_rx.recv() => {
                        tracing::debug!("Cache reaper stopping");
                        break;
                    }
                }
            }
        });

        ReaperHandle {
            shutdown_tx,
            task: Some(task),
        }
    }
}

impl ResponseCache for ExpiringCache {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        let cache = self.inner.lock().map_or_else(
            |_| {
                tracing::error!("Cache lock poisoned on get('{key}'), returning miss");
                None
            },
            Some,
        )?;
        cache.get(key).map(|entry| entry.value.clone())
    }

    fn add(&self, key: &str, value: Vec<u8>) {
        if let Ok(mut cache) = self.inner.lock() {
            cache.insert(
                key.to_string(),
                CacheEntry {
                    value,
                    created_at: Instant::now(),
                },
            );
        } else {
            tracing::error!("Cache lock poisoned on add('{key}'), skipping write");
        }
    }
}

/// Owns the background reaper task. Dropping the handle aborts the task.
pub struct ReaperHandle {
    shutdown_tx: mpsc::Sender<()>,
    task: Option<JoinHandle<()>>,
}

impl ReaperHandle {
    /// Stop the reaper and wait for the task to finish.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(()).await;
        if let Some(task) = self.task.take()
            && let Err(e) = task.await
        {
            tracing::warn!(error = %e, "Cache reaper task ended abnormally");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for ReaperHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
