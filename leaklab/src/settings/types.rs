use serde::{Deserialize, Serialize};

/// The three attack exercises a visitor can complete. Stored under the
/// short keys "1", "2" and "3".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeKey {
    /// Cross-tenant employee listing via a tampered company id
    One,
    /// Self-promotion from Basic to Admin
    Two,
    /// Impersonating an admin of another company
    Three,
}

impl ChallengeKey {
    pub const ALL: [ChallengeKey; 3] = [ChallengeKey::One, ChallengeKey::Two, ChallengeKey::Three];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeKey::One => "1",
            ChallengeKey::Two => "2",
            ChallengeKey::Three => "3",
        }
    }
}

/// One persisted boolean flag
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SettingValue {
    pub key: String,
    pub value: bool,
}

/// Completion state of all three challenges
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedChallenges {
    pub one: bool,
    pub two: bool,
    pub three: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_keys_are_distinct() {
        assert_eq!(ChallengeKey::One.as_str(), "1");
        assert_eq!(ChallengeKey::Two.as_str(), "2");
        assert_eq!(ChallengeKey::Three.as_str(), "3");
        assert_eq!(ChallengeKey::ALL.len(), 3);
    }

    #[test]
    fn test_completed_challenges_default_is_all_false() {
        let completed = CompletedChallenges::default();
        assert!(!completed.one && !completed.two && !completed.three);
    }
}
