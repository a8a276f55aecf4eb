use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::client::SourceData;
use crate::error::{LoaderError, LoaderResult};

/// Capability to cache raw leaderboard responses. The TTL passed to `save` is
/// advisory: expiry policy belongs to the implementation.
#[async_trait]
pub trait Cache: Send + Sync {
    async fn contains(&self, key: &str) -> LoaderResult<bool>;
    async fn save(&self, key: &str, data: &SourceData, ttl_secs: u64) -> LoaderResult<()>;
    async fn fetch(&self, key: &str) -> LoaderResult<Option<SourceData>>;
    async fn delete(&self, key: &str) -> LoaderResult<bool>;
}

/// Cache variant for loaders wired without one: every lookup misses, writes
/// are dropped, deletes report success.
pub struct NoCache;

#[async_trait]
impl Cache for NoCache {
    async fn contains(&self, _key: &str) -> LoaderResult<bool> {
        Ok(false)
    }

    async fn save(&self, _key: &str, _data: &SourceData, _ttl_secs: u64) -> LoaderResult<()> {
        Ok(())
    }

    async fn fetch(&self, _key: &str) -> LoaderResult<Option<SourceData>> {
        Ok(None)
    }

    async fn delete(&self, _key: &str) -> LoaderResult<bool> {
        Ok(true)
    }
}

struct Entry {
    data: SourceData,
    expires_at: DateTime<Utc>,
}

impl Entry {
    fn expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

type SharedEntries = Arc<Mutex<HashMap<String, Entry>>>;

/// In-memory cache with per-entry expiry. Expired entries are treated as
/// absent on read and overwritten on the next save.
#[derive(Clone)]
pub struct MemoryCache {
    entries: SharedEntries,
}

impl MemoryCache {
    pub fn new() -> MemoryCache {
        MemoryCache {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn lock(&self) -> LoaderResult<MutexGuard<'_, HashMap<String, Entry>>> {
        self.entries
            .lock()
            .map_err(|_| LoaderError::Cache("cache mutex poisoned".to_string()))
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        MemoryCache::new()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn contains(&self, key: &str) -> LoaderResult<bool> {
        let entries = self.lock()?;
        Ok(entries.get(key).map_or(false, |entry| !entry.expired()))
    }

    async fn save(&self, key: &str, data: &SourceData, ttl_secs: u64) -> LoaderResult<()> {
        let expires_at = Utc::now() + Duration::seconds(ttl_secs as i64);
        let mut entries = self.lock()?;
        entries.insert(
            key.to_string(),
            Entry {
                data: data.clone(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn fetch(&self, key: &str) -> LoaderResult<Option<SourceData>> {
        let entries = self.lock()?;
        Ok(entries
            .get(key)
            .filter(|entry| !entry.expired())
            .map(|entry| entry.data.clone()))
    }

    async fn delete(&self, key: &str) -> LoaderResult<bool> {
        let mut entries = self.lock()?;
        Ok(entries.remove(key).is_some())
    }
}
