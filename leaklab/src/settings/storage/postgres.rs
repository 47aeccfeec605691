use sqlx::{Pool, Postgres};

use crate::settings::errors::SettingsError;
use crate::settings::types::SettingValue;
use crate::storage::DB_TABLE_SETTINGS;

pub(super) async fn create_tables_postgres(pool: &Pool<Postgres>) -> Result<(), SettingsError> {
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

pub(super) async fn get_setting_postgres(
    pool: &Pool<Postgres>,
    key: &str,
) -> Result<Option<bool>, SettingsError> {
    let table_name = DB_TABLE_SETTINGS.as_str();

    sqlx::query_as::<_, SettingValue>(&format!(
        "SELECT key, value FROM {table_name} WHERE key = $1"
    ))
    .bind(key)
    .fetch_optional(pool)
    .await
    .map(|row| row.map(|setting| setting.value))
    .map_err(|e| SettingsError::Storage(e.to_string()))
}

pub(super) async fn set_setting_postgres(
    pool: &Pool<Postgres>,
    key: &str,
    value: bool,
) -> Result<(), SettingsError> {
    let table_name = DB_TABLE_SETTINGS.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {table_name} (key, value)
        VALUES ($1, $2)
        ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value
        "#
    ))
    .bind(key)
    .bind(value)
    .execute(pool)
    .await
    .map_err(|e| SettingsError::Storage(e.to_string()))?;

    Ok(())
}
