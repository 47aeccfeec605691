use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum SettingsError {
    #[error("Storage error: {0}")]
    Storage(String),
}
