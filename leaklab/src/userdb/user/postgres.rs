use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::storage::DB_TABLE_USERS;
use crate::userdb::{
    errors::UserError,
    types::{Role, User},
};

pub(super) async fn create_tables_postgres(pool: &Pool<Postgres>) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id BIGSERIAL PRIMARY KEY,
            identifier TEXT NOT NULL UNIQUE,
            company_id BIGINT NOT NULL,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            role INTEGER NOT NULL,
            active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn get_user_postgres(
    pool: &Pool<Postgres>,
    id: i64,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query_as::<_, User>(&format!("SELECT * FROM {table_name} WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn get_user_by_username_postgres(
    pool: &Pool<Postgres>,
    username: &str,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query_as::<_, User>(&format!("SELECT * FROM {table_name} WHERE username = $1"))
        .bind(username)
        .fetch_optional(pool)
        .await
        .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn get_user_by_identifier_postgres(
    pool: &Pool<Postgres>,
    identifier: &str,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query_as::<_, User>(&format!("SELECT * FROM {table_name} WHERE identifier = $1"))
        .bind(identifier)
        .fetch_optional(pool)
        .await
        .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn get_users_by_company_postgres(
    pool: &Pool<Postgres>,
    company_id: i64,
) -> Result<Vec<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query_as::<_, User>(&format!(
        "SELECT * FROM {table_name} WHERE company_id = $1 ORDER BY id"
    ))
    .bind(company_id)
    .fetch_all(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn upsert_user_postgres(
    pool: &Pool<Postgres>,
    mut user: User,
) -> Result<User, UserError> {
    let table_name = DB_TABLE_USERS.as_str();
    user.updated_at = Utc::now();

    let id = sqlx::query_scalar::<_, i64>(&format!(
        r#"
        INSERT INTO {table_name}
            (identifier, company_id, username, password_hash, role, active, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (identifier) DO UPDATE SET
            company_id = EXCLUDED.company_id,
            username = EXCLUDED.username,
            password_hash = EXCLUDED.password_hash,
            role = EXCLUDED.role,
            active = EXCLUDED.active,
            updated_at = EXCLUDED.updated_at
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

pub(super) async fn update_user_role_postgres(
    pool: &Pool<Postgres>,
    user_id: i64,
    role: Role,
) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let result = sqlx::query(&format!(
        "UPDATE {table_name} SET role = $1, updated_at = $2 WHERE id = $3"
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

pub(super) async fn count_users_postgres(
    pool: &Pool<Postgres>,
    company_id: i64,
    role: Option<Role>,
) -> Result<i64, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let count = match role {
        Some(role) => sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM {table_name} WHERE company_id = $1 AND role = $2"
        ))
        .bind(company_id)
        .bind(role)
        .fetch_one(pool)
        .await
        .map_err(|e| UserError::Storage(e.to_string()))?,
        None => sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM {table_name} WHERE company_id = $1"
        ))
        .bind(company_id)
        .fetch_one(pool)
        .await
        .map_err(|e| UserError::Storage(e.to_string()))?,
    };

    Ok(count)
}
