use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// In-memory cache for provider results, keyed by request identity
/// (coin id, or symbol plus date range). Lives for one process run.
#[derive(Clone)]
pub struct Cache<V>
where
    V: Clone + Send + Sync + 'static,
{
    inner: Arc<Mutex<HashMap<String, V>>>,
}

impl<V> Cache<V>
where
    V: Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn get(&self, key: &str) -> Option<V> {
        let cache = self.inner.lock().await;
        let value = cache.get(key).cloned();
        if value.is_some() {
            debug!("Cache HIT for {key}");
        } else {
            debug!("Cache MISS for {key}");
        }
        value
    }

    pub async fn put(&self, key: String, value: V) {
        let mut cache = self.inner.lock().await;
        debug!("Cache PUT for {key}");
        cache.insert(key, value);
    }
}

impl<V> Default for Cache<V>
where
    V: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}
