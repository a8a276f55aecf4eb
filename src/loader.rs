use serde::Serialize;
use serde_json::Value;
use sha1::{Digest, Sha1};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::cache::Cache;
use crate::client::{Fetcher, SourceData};
use crate::envelope::Envelope;
use crate::error::{LoaderError, LoaderResult};

/// Immutable configuration of a loader instance, fixed at construction. The
/// cache key is a pure function of these fields, so loaders configured
/// identically share one cache entry and any field difference keeps them
/// apart, even for the same URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoaderConfig {
    url: String,
    root: String,
    status_key: String,
    message_key: String,
    status_ok: String,
    ttl: u64,
}

impl LoaderConfig {
    pub fn new(url: impl Into<String>) -> LoaderConfig {
        LoaderConfig {
            url: url.into(),
            root: "leaderboard".to_string(),
            status_key: "status".to_string(),
            message_key: "message".to_string(),
            status_ok: "OK".to_string(),
            ttl: 60,
        }
    }

    pub fn with_root(mut self, root: impl Into<String>) -> LoaderConfig {
        self.root = root.into();
        self
    }

    pub fn with_status_key(mut self, status_key: impl Into<String>) -> LoaderConfig {
        self.status_key = status_key.into();
        self
    }

    pub fn with_message_key(mut self, message_key: impl Into<String>) -> LoaderConfig {
        self.message_key = message_key.into();
        self
    }

    pub fn with_status_ok(mut self, status_ok: impl Into<String>) -> LoaderConfig {
        self.status_ok = status_ok.into();
        self
    }

    pub fn with_ttl(mut self, ttl: u64) -> LoaderConfig {
        self.ttl = ttl;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn status_key(&self) -> &str {
        &self.status_key
    }

    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    pub fn status_ok(&self) -> &str {
        &self.status_ok
    }

    pub fn ttl(&self) -> u64 {
        self.ttl
    }

    /// Stable structural hash of the configured fields, scoping cache entries
    /// per distinct configuration rather than per URL alone.
    pub fn cache_key(&self) -> String {
        // Serializing a struct of strings and an integer cannot fail.
        let serialized = serde_json::to_string(self).unwrap_or_default();
        let mut hasher = Sha1::new();
        hasher.update(serialized.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

/// Fetches the remote leaderboard document through an injected [`Fetcher`],
/// caching raw responses through an injected [`Cache`], and validates the
/// status envelope before handing the payload to callers.
pub struct DataLoader {
    config: LoaderConfig,
    fetcher: Arc<dyn Fetcher>,
    cache: Arc<dyn Cache>,
}

impl DataLoader {
    pub fn new(config: LoaderConfig, fetcher: Arc<dyn Fetcher>, cache: Arc<dyn Cache>) -> DataLoader {
        DataLoader {
            config,
            fetcher,
            cache,
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Returns the raw response envelope, from the cache when a live entry
    /// exists, otherwise fetched and written through the cache. After a write
    /// the value is read back from the cache, so callers observe exactly what
    /// the backend stored. Fetcher and cache failures propagate unchanged.
    pub async fn load_source_data(&self) -> LoaderResult<SourceData> {
        let key = self.config.cache_key();

        if !self.cache.contains(&key).await? {
            debug!("cache miss for {}, fetching {}", key, self.config.url());
            let data = self.fetcher.load(self.config.url()).await?;
            self.cache.save(&key, &data, self.config.ttl()).await?;

            return match self.cache.fetch(&key).await? {
                Some(cached) => Ok(cached),
                // The backend declined to hold the entry (NoCache): hand the
                // fetched value over directly.
                None => Ok(data),
            };
        }

        self.cache.fetch(&key).await?.ok_or_else(|| {
            LoaderError::Cache(format!("entry {} expired between lookup and read", key))
        })
    }

    /// Validates the envelope and returns the value under the configured root
    /// key. Any malformed or error-status envelope evicts the cache entry
    /// before the error surfaces, so a bad payload is never served twice from
    /// cache.
    pub async fn handle_loaded_data(&self) -> LoaderResult<Value> {
        let source_data = self.load_source_data().await?;

        match Envelope::classify(&source_data, &self.config).into_result() {
            Ok(payload) => Ok(payload),
            Err(err) => {
                let key = self.config.cache_key();
                warn!("discarding leaderboard response: {}", err);
                if let Err(cache_err) = self.clear_cache(&key).await {
                    // The eviction failure must not mask the validation error.
                    warn!("failed to evict cache entry {}: {}", key, cache_err);
                }
                Err(err)
            }
        }
    }

    /// Evicts one cache entry, reporting whether the backend held it. A
    /// [`NoCache`](crate::cache::NoCache) collaborator reports success.
    pub async fn clear_cache(&self, key: &str) -> LoaderResult<bool> {
        self.cache.delete(key).await
    }
}
