use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::CacheData;
use crate::userdb::{Role, User};

use super::errors::SessionError;

/// The user fields a session carries. The password hash never enters
/// the cache.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub user_id: i64,
    pub identifier: String,
    pub username: String,
    pub company_id: i64,
    pub company_name: String,
    pub role: Role,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl SessionIdentity {
    pub fn from_user(user: &User, company_name: String) -> Self {
        Self {
            user_id: user.id.unwrap_or_default(),
            identifier: user.identifier.clone(),
            username: user.username.clone(),
            company_id: user.company_id,
            company_name,
            role: user.role,
            active: user.active,
            created_at: user.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub(super) struct StoredSession {
    pub(super) identity: SessionIdentity,
    pub(super) expires_at: DateTime<Utc>,
    pub(super) ttl: u64,
}

impl StoredSession {
    pub(super) fn new(identity: SessionIdentity, ttl: u64) -> Self {
        Self {
            identity,
            expires_at: Utc::now() + Duration::seconds(ttl as i64),
            ttl,
        }
    }
}

impl TryFrom<StoredSession> for CacheData {
    type Error = SessionError;

    fn try_from(session: StoredSession) -> Result<Self, Self::Error> {
        Ok(CacheData {
            value: serde_json::to_string(&session)?,
        })
    }
}

impl TryFrom<CacheData> for StoredSession {
    type Error = SessionError;

    fn try_from(data: CacheData) -> Result<Self, Self::Error> {
        Ok(serde_json::from_str(&data.value)?)
    }
}
