//! leaklab - Deliberately vulnerable multi-tenant authorization core
//!
//! This crate implements the session, tenancy and authorization layers
//! of a teaching application for IDOR and privilege-escalation
//! detection. Access-control checks are gated behind a runtime flag
//! that starts OFF; every bypass is written to a structured security
//! log so learners can watch the attack instead of just performing it.

mod audit;
mod coordination;
mod demo;
mod locator;
mod password;
mod session;
mod settings;
mod storage;
mod tenancy;
mod userdb;
mod utils;

#[cfg(test)]
mod test_utils;

// Re-export the coordinated operations
pub use coordination::{
    AuthError, CoordinationError, DashboardSummary, DenyReason, HIGH_SALARY_THRESHOLD,
    completed_challenges, demote_self, impersonate, list_employees, list_users, login,
    promote_self, summary_counts,
};

pub use audit::Severity;
pub use demo::seed_demo_data;
pub use locator::{
    LocatorError, decode_company_locator, encode_company_locator, parse_employee_scope,
    parse_impersonation_token,
};
pub use password::{PasswordError, hash_password, verify_password};
pub use session::{
    SESSION_TTL, SessionError, SessionIdentity, create_session, delete_session,
    get_session_identity, replace_session_identity,
};
pub use settings::{
    ChallengeKey, ChallengeTracker, CompletedChallenges, SettingValue, SettingsError,
    SettingsStore, is_enforced, set_enforcement,
};
pub use tenancy::{Company, CompanyStore, Employee, EmployeeStore, EmployeeView, TenancyError};
pub use userdb::{Role, User, UserError, UserStore};
pub use utils::{UtilError, gen_random_string};

/// Initialize the global stores and the schema they manage
pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    storage::init().await?;
    userdb::init().await?;
    tenancy::init().await?;
    settings::init().await?;
    Ok(())
}
