mod challenge;
mod enforcement;
mod errors;
mod storage;
mod types;

pub use challenge::ChallengeTracker;
pub use enforcement::{is_enforced, set_enforcement};
pub use errors::SettingsError;
pub use storage::SettingsStore;
pub use types::{ChallengeKey, CompletedChallenges, SettingValue};

/// Initialize the settings table
pub async fn init() -> Result<(), SettingsError> {
    SettingsStore::init().await
}
