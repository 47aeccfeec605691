use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The two roles in the demo tenant model, stored as integers.
///
/// The discriminants match the wire values the learner sees in requests
/// and seeded data: admin is 1, basic is 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i32)]
pub enum Role {
    Admin = 1,
    Basic = 2,
}

impl Role {
    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

/// A tenant-scoped account as persisted in the user store.
///
/// The `identifier` is an opaque, sortable token shown to clients in place
/// of the sequential numeric id so resource locators are not enumerable.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct User {
    /// Database-assigned sequence number (primary key)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Opaque sortable identifier used in client-facing locators
    pub identifier: String,
    /// Owning company (tenant boundary)
    pub company_id: i64,
    /// Globally unique login name
    pub username: String,
    /// Argon2 PHC-formatted hash; never leaves the userdb/coordination layers
    pub password_hash: String,
    pub role: Role,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user belonging to `company_id`.
    pub fn new(company_id: i64, username: String, password_hash: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            identifier: Uuid::now_v7().to_string(),
            company_id,
            username,
            password_hash,
            role,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
