//! Shared setup for unit tests. Points the global stores at an
//! in-memory SQLite database and the in-process cache unless the
//! environment says otherwise.

use std::sync::Once;

static INIT: Once = Once::new();

fn set_default(key: &str, value: &str) {
    if std::env::var(key).is_err() {
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

pub(crate) async fn init_test_environment() {
    INIT.call_once(|| {
        let _ = dotenvy::from_filename(".env_test");

        set_default("LEAKLAB_DATA_STORE_TYPE", "sqlite");
        set_default(
            "LEAKLAB_DATA_STORE_URL",
            "sqlite:file:leaklab_test?mode=memory&cache=shared",
        );
        set_default("LEAKLAB_CACHE_STORE_TYPE", "memory");
        set_default("LEAKLAB_CACHE_STORE_URL", "memory://");
    });

    if let Err(e) = crate::storage::init().await {
        eprintln!("Failed to initialize storage: {e}");
    }
    if let Err(e) = crate::userdb::init().await {
        eprintln!("Failed to initialize user store: {e}");
    }
    if let Err(e) = crate::tenancy::init().await {
        eprintln!("Failed to initialize tenancy stores: {e}");
    }
    if let Err(e) = crate::settings::init().await {
        eprintln!("Failed to initialize settings store: {e}");
    }
}
