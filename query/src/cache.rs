//! The cache itself.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::warn;

use crate::error::QueryError;
use crate::key::QueryKey;
use crate::policy::QueryPolicy;

/// A fetched value plus its cache provenance.
#[derive(Clone, Debug)]
pub struct QueryResult<T> {
    pub data: T,
    /// True when the value came from a still-fresh cache entry and the
    /// fetcher did not run.
    pub is_cached_data: bool,
}

struct CacheEntry {
    data: serde_json::Value,
    fetched_at: Instant,
    expires_at: Instant,
}

/// In-memory cache keyed by [`QueryKey`].
///
/// Values are type-erased through `serde_json::Value` so one cache serves
/// every query function. Two concurrent misses on the same key may both run
/// their fetcher; the later write wins.
#[derive(Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<QueryKey, CacheEntry>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `key`, running `fetch` on a miss or stale entry.
    ///
    /// A fresh entry (younger than `policy.stale_time`) is returned without
    /// running the fetcher. Otherwise the fetcher runs, with up to
    /// `policy.retry` additional attempts on failure; the successful value
    /// replaces the entry. A failed refresh leaves any previous entry in
    /// place and surfaces [`QueryError::Fetch`].
    pub async fn fetch_with<T, E, F, Fut>(
        &self,
        key: QueryKey,
        policy: QueryPolicy,
        mut fetch: F,
    ) -> Result<QueryResult<T>, QueryError>
    where
        T: Serialize + DeserializeOwned,
        E: fmt::Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        {
            let entries = self.entries.lock().await;
            if let Some(entry) = entries.get(&key) {
                if entry.fetched_at.elapsed() < policy.stale_time {
                    let data = serde_json::from_value(entry.data.clone())
                        .map_err(|e| QueryError::Value(e.to_string()))?;
                    return Ok(QueryResult {
                        data,
                        is_cached_data: true,
                    });
                }
            }
        }

        let attempts = policy.retry + 1;
        let mut last_error = String::new();
        for attempt in 1..=attempts {
            match fetch().await {
                Ok(data) => {
                    let value = serde_json::to_value(&data)
                        .map_err(|e| QueryError::Value(e.to_string()))?;
                    let now = Instant::now();
                    self.entries.lock().await.insert(
                        key,
                        CacheEntry {
                            data: value,
                            fetched_at: now,
                            expires_at: now + policy.gc_time,
                        },
                    );
                    return Ok(QueryResult {
                        data,
                        is_cached_data: false,
                    });
                }
                Err(e) => {
                    last_error = e.to_string();
                    if attempt < attempts {
                        warn!(
                            function = key.function,
                            attempt, "query fetch failed, retrying: {last_error}"
                        );
                    }
                }
            }
        }

        Err(QueryError::Fetch {
            attempts,
            message: last_error,
        })
    }

    /// Drop the entry for `key`, forcing the next lookup to fetch.
    pub async fn invalidate(&self, key: &QueryKey) {
        self.entries.lock().await.remove(key);
    }

    /// Drop every entry whose `gc_time` has elapsed.
    pub async fn gc(&self) {
        let now = Instant::now();
        self.entries
            .lock()
            .await
            .retain(|_, entry| entry.expires_at > now);
    }

    /// Number of live entries.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
