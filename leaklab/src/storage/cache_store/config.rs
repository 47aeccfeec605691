use std::{env, sync::LazyLock};
use tokio::sync::Mutex;

use super::types::{CacheStore, InMemoryCacheStore, RedisCacheStore};

static CACHE_STORE_TYPE: LazyLock<String> = LazyLock::new(|| {
    env::var("LEAKLAB_CACHE_STORE_TYPE").expect("LEAKLAB_CACHE_STORE_TYPE must be set")
});

static CACHE_STORE_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("LEAKLAB_CACHE_STORE_URL").expect("LEAKLAB_CACHE_STORE_URL must be set")
});

pub static GENERIC_CACHE_STORE: LazyLock<Mutex<Box<dyn CacheStore>>> = LazyLock::new(|| {
    let store_type = CACHE_STORE_TYPE.as_str();
    let store_url = CACHE_STORE_URL.as_str();

    tracing::info!(
        "Initializing cache store with type: {}, url: {}",
        store_type,
        store_url
    );

    let store: Box<dyn CacheStore> = match store_type {
        "memory" => Box::new(InMemoryCacheStore::new()),
        "redis" => {
            let client = match redis::Client::open(store_url) {
                Ok(client) => client,
                Err(e) => {
                    tracing::error!("Failed to create Redis client: {}", e);
                    panic!("Failed to create Redis client: {e}");
                }
            };
            Box::new(RedisCacheStore { client })
        }
        t => panic!("Unsupported cache store type: {t}. Supported types are 'memory' and 'redis'"),
    };

    Mutex::new(store)
});

#[cfg(test)]
mod tests {
    #[test]
    fn test_supported_cache_store_types() {
        for store_type in ["memory", "redis"] {
            assert!(matches!(store_type, "memory" | "redis"));
        }
        assert!(!matches!("memcached", "memory" | "redis"));
    }
}
