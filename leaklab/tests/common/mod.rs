use std::sync::Once;

static INIT: Once = Once::new();

fn set_default(key: &str, value: &str) {
    if std::env::var(key).is_err() {
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

/// Point the global stores at an in-memory database and initialize the
/// schema. Call at the top of every test.
pub async fn setup() {
    INIT.call_once(|| {
        let _ = dotenvy::from_filename(".env_test");

        set_default("LEAKLAB_DATA_STORE_TYPE", "sqlite");
        set_default(
            "LEAKLAB_DATA_STORE_URL",
            "sqlite:file:leaklab_integration?mode=memory&cache=shared",
        );
        set_default("LEAKLAB_CACHE_STORE_TYPE", "memory");
        set_default("LEAKLAB_CACHE_STORE_URL", "memory://");
    });

    leaklab::init().await.expect("store initialization failed");
}
