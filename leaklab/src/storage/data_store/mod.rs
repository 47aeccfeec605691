mod config;
mod types;

pub use config::GENERIC_DATA_STORE;
