use crate::settings::errors::SettingsError;
use crate::storage::GENERIC_DATA_STORE;

use super::postgres::*;
use super::sqlite::*;

pub struct SettingsStore;

impl SettingsStore {
    /// Initialize the settings table
    pub async fn init() -> Result<(), SettingsError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            create_tables_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            create_tables_postgres(pool).await
        } else {
            Err(SettingsError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Read one flag. `None` when the key has never been written.
    pub async fn get_setting(key: &str) -> Result<Option<bool>, SettingsError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_setting_sqlite(pool, key).await
        } else if let Some(pool) = store.as_postgres() {
            get_setting_postgres(pool, key).await
        } else {
            Err(SettingsError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Write one flag, inserting or overwriting as needed
    pub async fn set_setting(key: &str, value: bool) -> Result<(), SettingsError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            set_setting_sqlite(pool, key, value).await
        } else if let Some(pool) = store.as_postgres() {
            set_setting_postgres(pool, key, value).await
        } else {
            Err(SettingsError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }
}
