use crate::storage::GENERIC_DATA_STORE;
use crate::userdb::{
    errors::UserError,
    types::{Role, User},
};

use super::postgres::*;
use super::sqlite::*;

pub struct UserStore;

impl UserStore {
    /// Initialize the user table
    pub async fn init() -> Result<(), UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            create_tables_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            create_tables_postgres(pool).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Get a user by numeric id
    pub async fn get_user(id: i64) -> Result<Option<User>, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_user_sqlite(pool, id).await
        } else if let Some(pool) = store.as_postgres() {
            get_user_postgres(pool, id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Get a user by globally unique username
    pub async fn get_user_by_username(username: &str) -> Result<Option<User>, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_user_by_username_sqlite(pool, username).await
        } else if let Some(pool) = store.as_postgres() {
            get_user_by_username_postgres(pool, username).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Get a user by the opaque identifier carried in client-facing locators
    pub async fn get_user_by_identifier(identifier: &str) -> Result<Option<User>, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_user_by_identifier_sqlite(pool, identifier).await
        } else if let Some(pool) = store.as_postgres() {
            get_user_by_identifier_postgres(pool, identifier).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// List all users belonging to a company
    pub async fn get_users_by_company(company_id: i64) -> Result<Vec<User>, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_users_by_company_sqlite(pool, company_id).await
        } else if let Some(pool) = store.as_postgres() {
            get_users_by_company_postgres(pool, company_id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Create or update a user, keyed by the opaque identifier
    pub async fn upsert_user(user: User) -> Result<User, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            upsert_user_sqlite(pool, user).await
        } else if let Some(pool) = store.as_postgres() {
            upsert_user_postgres(pool, user).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Persist a role change for the given user id.
    ///
    /// Returns `UserError::NotFound` when no row was updated, so callers can
    /// refuse to update session state on a missed write.
    pub async fn update_user_role(user_id: i64, role: Role) -> Result<(), UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            update_user_role_sqlite(pool, user_id, role).await
        } else if let Some(pool) = store.as_postgres() {
            update_user_role_postgres(pool, user_id, role).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Count users belonging to a company
    pub async fn count_users(company_id: i64) -> Result<i64, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            count_users_sqlite(pool, company_id, None).await
        } else if let Some(pool) = store.as_postgres() {
            count_users_postgres(pool, company_id, None).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Count users with the Admin role belonging to a company
    pub async fn count_admins(company_id: i64) -> Result<i64, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            count_users_sqlite(pool, company_id, Some(Role::Admin)).await
        } else if let Some(pool) = store.as_postgres() {
            count_users_postgres(pool, company_id, Some(Role::Admin)).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }
}
