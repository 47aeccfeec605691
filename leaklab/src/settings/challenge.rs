use tracing::info;

use crate::settings::{
    errors::SettingsError,
    storage::SettingsStore,
    types::{ChallengeKey, CompletedChallenges},
};

/// Persisted, idempotent completion state for the three exercises.
pub struct ChallengeTracker;

impl ChallengeTracker {
    /// Mark one challenge as done. Completing an already-complete
    /// challenge is a no-op, so logs fire only on the first success.
    pub async fn complete(key: ChallengeKey) -> Result<(), SettingsError> {
        let already_done = SettingsStore::get_setting(key.as_str())
            .await?
            .unwrap_or(false);
        if already_done {
            return Ok(());
        }

        SettingsStore::set_setting(key.as_str(), true).await?;
        info!(challenge = key.as_str(), "challenge completed");
        Ok(())
    }

    /// Read completion state of all three challenges. Unset keys read as
    /// not completed.
    pub async fn completed() -> Result<CompletedChallenges, SettingsError> {
        let mut completed = CompletedChallenges::default();
        for key in ChallengeKey::ALL {
            let done = SettingsStore::get_setting(key.as_str())
                .await?
                .unwrap_or(false);
            match key {
                ChallengeKey::One => completed.one = done,
                ChallengeKey::Two => completed.two = done,
                ChallengeKey::Three => completed.three = done,
            }
        }
        Ok(completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_test_environment;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_completion_is_tracked_per_key() {
        init_test_environment().await;

        SettingsStore::set_setting("1", false).await.unwrap();
        SettingsStore::set_setting("2", false).await.unwrap();
        SettingsStore::set_setting("3", false).await.unwrap();

        ChallengeTracker::complete(ChallengeKey::Two).await.unwrap();

        let completed = ChallengeTracker::completed().await.unwrap();
        assert!(!completed.one);
        assert!(completed.two);
        assert!(!completed.three);
    }

    #[tokio::test]
    #[serial]
    async fn test_completing_twice_is_idempotent() {
        init_test_environment().await;

        SettingsStore::set_setting("3", false).await.unwrap();

        ChallengeTracker::complete(ChallengeKey::Three)
            .await
            .unwrap();
        ChallengeTracker::complete(ChallengeKey::Three)
            .await
            .unwrap();

        let completed = ChallengeTracker::completed().await.unwrap();
        assert!(completed.three);
    }
}
