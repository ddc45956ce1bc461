use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;
use wordbook_types::{LookupResult, VerbForm};

/// Keyed store with per-entry expiry
#[async_trait]
pub trait Cache<V>: Send + Sync
where
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Option<V>;

    async fn set(&self, key: String, value: V, ttl: Duration);
}

/// Everything the lookup path keeps in the shared cache
#[derive(Debug, Clone)]
pub enum CachedValue {
    Entry(Arc<LookupResult>),
    Verbs(Arc<Vec<VerbForm>>),
}

/// Cache key for a page URL: every character outside `[A-Za-z0-9]` becomes `_`
pub fn cache_key(url: &str) -> String {
    url.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

struct Slot<V> {
    value: V,
    inserted_at: Instant,
    expires_at: Instant,
}

impl<V> Slot<V> {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Process-local [`Cache`] bounded by entry count.
///
/// Expired entries are dropped lazily on access and on insert. When full,
/// the oldest insertion is evicted.
pub struct MemoryCache<V> {
    entries: RwLock<HashMap<String, Slot<V>>>,
    max_entries: usize,
}

impl<V> MemoryCache<V> {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            max_entries: max_entries.max(1),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl<V> Cache<V> for MemoryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(slot) if slot.is_live(now) => return Some(slot.value.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|slot| !slot.is_live(now)) {
            entries.remove(key);
        }
        None
    }

    async fn set(&self, key: String, value: V, ttl: Duration) {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        entries.retain(|_, slot| slot.is_live(now));

        if !entries.contains_key(&key) && entries.len() >= self.max_entries {
            let oldest = entries
                .iter()
                .min_by_key(|(_, slot)| slot.inserted_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                tracing::debug!(key = %oldest, "evicting oldest cache entry");
                entries.remove(&oldest);
            }
        }

        entries.insert(
            key,
            Slot {
                value,
                inserted_at: now,
                expires_at: now + ttl,
            },
        );
    }
}
