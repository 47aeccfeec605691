//! Error types for the coordination layer

use thiserror::Error;

use crate::password::PasswordError;
use crate::session::SessionError;
use crate::settings::SettingsError;
use crate::tenancy::TenancyError;
use crate::userdb::UserError;
use crate::utils::UtilError;

/// Why a login was rejected. Both variants render the same generic
/// message; only the security log says which one happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    UserNotFound,
    CredentialMismatch,
}

impl AuthError {
    pub fn generic_message() -> &'static str {
        "Login failed, attempt has been logged."
    }
}

/// Why an authorization check refused a request. Never shown to the
/// client; deny responses stay uniform and the detail goes to the
/// security log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The locator could not be parsed at all
    MalformedLocator,
    /// The locator resolved to a company other than the actor's
    TenantMismatch,
    /// The actor's role does not permit the operation
    InsufficientRole,
}

/// Errors that can occur while coordinating an operation across the
/// user, tenancy, settings and session stores
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// Login rejected. The display string is deliberately generic
    /// regardless of the inner cause; the real cause is only written to
    /// the security log.
    #[error("{}", AuthError::generic_message())]
    Auth(AuthError),

    /// Request refused by an enforcement check
    #[error("Access denied")]
    Denied(DenyReason),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Resource not found with context
    #[error("Resource not found: {resource_type} {resource_id}")]
    ResourceNotFound {
        resource_type: String,
        resource_id: String,
    },

    /// Error from the user database operations
    #[error("User error: {0}")]
    UserError(UserError),

    /// Error from company and employee operations
    #[error("Tenancy error: {0}")]
    TenancyError(TenancyError),

    /// Error from settings operations
    #[error("Settings error: {0}")]
    SettingsError(SettingsError),

    /// Error from session operations
    #[error("Session error: {0}")]
    SessionError(SessionError),

    /// Error from password hashing operations
    #[error("Password error: {0}")]
    PasswordError(PasswordError),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    UtilsError(UtilError),
}

impl CoordinationError {
    /// Log the error and return self
    pub fn log(self) -> Self {
        match &self {
            Self::Auth(cause) => tracing::debug!("Login failed: {:?}", cause),
            Self::Denied(reason) => tracing::debug!("Access denied: {:?}", reason),
            Self::Database(msg) => tracing::error!("Database error: {}", msg),
            Self::ResourceNotFound {
                resource_type,
                resource_id,
            } => tracing::error!("Resource not found: {} {}", resource_type, resource_id),
            Self::UserError(err) => tracing::error!("User error: {}", err),
            Self::TenancyError(err) => tracing::error!("Tenancy error: {}", err),
            Self::SettingsError(err) => tracing::error!("Settings error: {}", err),
            Self::SessionError(err) => tracing::error!("Session error: {}", err),
            Self::PasswordError(err) => tracing::error!("Password error: {}", err),
            Self::UtilsError(err) => tracing::error!("Utils error: {}", err),
        }
        self
    }
}

// Custom From implementations that automatically log errors

impl From<UserError> for CoordinationError {
    fn from(err: UserError) -> Self {
        let error = Self::UserError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<TenancyError> for CoordinationError {
    fn from(err: TenancyError) -> Self {
        let error = Self::TenancyError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<SettingsError> for CoordinationError {
    fn from(err: SettingsError) -> Self {
        let error = Self::SettingsError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<SessionError> for CoordinationError {
    fn from(err: SessionError) -> Self {
        let error = Self::SessionError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<PasswordError> for CoordinationError {
    fn from(err: PasswordError) -> Self {
        let error = Self::PasswordError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<UtilError> for CoordinationError {
    fn from(err: UtilError) -> Self {
        let error = Self::UtilsError(err);
        tracing::error!("{}", error);
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<CoordinationError>();
    }

    #[test]
    fn test_login_failure_display_never_discloses_the_cause() {
        let unknown = CoordinationError::Auth(AuthError::UserNotFound).to_string();
        let mismatch = CoordinationError::Auth(AuthError::CredentialMismatch).to_string();

        assert_eq!(unknown, "Login failed, attempt has been logged.");
        assert_eq!(unknown, mismatch);
        assert!(!unknown.contains("password"));
        assert!(!unknown.contains("user"));
    }

    #[test]
    fn test_deny_display_hides_the_reason() {
        for reason in [
            DenyReason::MalformedLocator,
            DenyReason::TenantMismatch,
            DenyReason::InsufficientRole,
        ] {
            assert_eq!(CoordinationError::Denied(reason).to_string(), "Access denied");
        }
    }

    #[test]
    fn test_error_display() {
        let err = CoordinationError::Database("db error".to_string());
        assert_eq!(err.to_string(), "Database error: db error");

        let err = CoordinationError::ResourceNotFound {
            resource_type: "User".to_string(),
            resource_id: "123".to_string(),
        };
        assert_eq!(err.to_string(), "Resource not found: User 123");
    }

    #[test]
    fn test_from_user_error() {
        let user_err = UserError::Storage("user db error".to_string());
        let err: CoordinationError = user_err.into();

        if let CoordinationError::UserError(UserError::Storage(msg)) = err {
            assert_eq!(msg, "user db error");
        } else {
            panic!("Wrong error type");
        }
    }

    #[test]
    fn test_from_session_error() {
        let session_err = SessionError::Storage("session storage error".to_string());
        let err: CoordinationError = session_err.into();

        if let CoordinationError::SessionError(SessionError::Storage(msg)) = err {
            assert_eq!(msg, "session storage error");
        } else {
            panic!("Wrong error type");
        }
    }

    #[test]
    fn test_error_log_returns_self() {
        let err = CoordinationError::Denied(DenyReason::TenantMismatch).log();
        assert!(matches!(
            err,
            CoordinationError::Denied(DenyReason::TenantMismatch)
        ));
    }
}
