use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::storage::DB_TABLE_USERS;
use crate::userdb::{
    errors::UserError,
    types::{Role, User},
};

pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            identifier TEXT NOT NULL UNIQUE,
            company_id INTEGER NOT NULL,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            role INTEGER NOT NULL,
            active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn get_user_sqlite(
    pool: &Pool<Sqlite>,
    id: i64,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query_as::<_, User>(&format!("SELECT * FROM {table_name} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn get_user_by_username_sqlite(
    pool: &Pool<Sqlite>,
    username: &str,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query_as::<_, User>(&format!("SELECT * FROM {table_name} WHERE username = ?"))
        .bind(username)
        .fetch_optional(pool)
        .await
        .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn get_user_by_identifier_sqlite(
    pool: &Pool<Sqlite>,
    identifier: &str,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query_as::<_, User>(&format!("SELECT * FROM {table_name} WHERE identifier = ?"))
        .bind(identifier)
        .fetch_optional(pool)
        .await
        .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn get_users_by_company_sqlite(
    pool: &Pool<Sqlite>,
    company_id: i64,
) -> Result<Vec<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query_as::<_, User>(&format!(
        "SELECT * FROM {table_name} WHERE company_id = ? ORDER BY id"
    ))
    .bind(company_id)
    .fetch_all(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn upsert_user_sqlite(
    pool: &Pool<Sqlite>,
    mut user: User,
) -> Result<User, UserError> {
    let table_name = DB_TABLE_USERS.as_str();
    user.updated_at = Utc::now();

    let id = sqlx::query_scalar::<_, i64>(&format!(
        r#"
        INSERT INTO {table_name}
            (identifier, company_id, username, password_hash, role, active, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(identifier) DO UPDATE SET
            company_id = excluded.company_id,
            username = excluded.username,
            password_hash = excluded.password_hash,
            role = excluded.role,
            active = excluded.active,
            updated_at = excluded.updated_at
        RETURNING id
        "#
    ))
    .bind(&user.identifier)
    .bind(user.company_id)
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(user.role)
    .bind(user.active)
    .bind(user.created_at)
    .bind(user.updated_at)
    .fetch_one(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    user.id = Some(id);
    Ok(user)
}

pub(super) async fn update_user_role_sqlite(
    pool: &Pool<Sqlite>,
    user_id: i64,
    role: Role,
) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let result = sqlx::query(&format!(
        "UPDATE {table_name} SET role = ?, updated_at = ? WHERE id = ?"
    ))
    .bind(role)
    .bind(Utc::now())
    .bind(user_id)
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(UserError::NotFound);
    }
    Ok(())
}

pub(super) async fn count_users_sqlite(
    pool: &Pool<Sqlite>,
    company_id: i64,
    role: Option<Role>,
) -> Result<i64, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let count = match role {
        Some(role) => sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM {table_name} WHERE company_id = ? AND role = ?"
        ))
        .bind(company_id)
        .bind(role)
        .fetch_one(pool)
        .await
        .map_err(|e| UserError::Storage(e.to_string()))?,
        None => sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM {table_name} WHERE company_id = ?"
        ))
        .bind(company_id)
        .fetch_one(pool)
        .await
        .map_err(|e| UserError::Storage(e.to_string()))?,
    };

    Ok(count)
}
