mod cache_store;
mod config;
mod data_store;
mod errors;
mod types;

pub async fn init() -> Result<(), errors::StorageError> {
    let _ = *data_store::GENERIC_DATA_STORE;
    let _ = *cache_store::GENERIC_CACHE_STORE;

    Ok(())
}

pub use cache_store::GENERIC_CACHE_STORE;
pub use data_store::GENERIC_DATA_STORE;
pub use types::CacheData;

pub(crate) use config::{
    DB_TABLE_COMPANIES, DB_TABLE_EMPLOYEES, DB_TABLE_SETTINGS, DB_TABLE_USERS,
};
pub(crate) use errors::StorageError;
