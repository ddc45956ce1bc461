use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_ttl_seconds() -> u64 {
    24 * 60 * 60
}

fn default_max_entries() -> usize {
    1000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Lifetime of every cached page result
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
    /// Capacity before the oldest entries are evicted
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
            max_entries: default_max_entries(),
        }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        let ttl_seconds = env::var("CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_ttl_seconds);

        let max_entries = env::var("CACHE_MAX_ENTRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n: &usize| *n > 0)
            .unwrap_or_else(default_max_entries);

        Self {
            ttl_seconds,
            max_entries,
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}
