use sqlx::{Pool, Sqlite};

use crate::settings::errors::SettingsError;
use crate::settings::types::SettingValue;
use crate::storage::DB_TABLE_SETTINGS;

pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), SettingsError> {
    let table_name = DB_TABLE_SETTINGS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            key TEXT PRIMARY KEY,
            value BOOLEAN NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| SettingsError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn get_setting_sqlite(
    pool: &Pool<Sqlite>,
    key: &str,
) -> Result<Option<bool>, SettingsError> {
    let table_name = DB_TABLE_SETTINGS.as_str();

    sqlx::query_as::<_, SettingValue>(&format!(
        "SELECT key, value FROM {table_name} WHERE key = ?"
    ))
    .bind(key)
    .fetch_optional(pool)
    .await
    .map(|row| row.map(|setting| setting.value))
    .map_err(|e| SettingsError::Storage(e.to_string()))
}

pub(super) async fn set_setting_sqlite(
    pool: &Pool<Sqlite>,
    key: &str,
    value: bool,
) -> Result<(), SettingsError> {
    let table_name = DB_TABLE_SETTINGS.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {table_name} (key, value)
        VALUES (?, ?)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value
        "#
    ))
    .bind(key)
    .bind(value)
    .execute(pool)
    .await
    .map_err(|e| SettingsError::Storage(e.to_string()))?;

    Ok(())
}
