use crate::audit;
use crate::password::verify_password;
use crate::session::SessionIdentity;
use crate::tenancy::CompanyStore;
use crate::userdb::UserStore;

use super::errors::{AuthError, CoordinationError};

/// Authenticate a username and password pair.
///
/// Every rejection renders the same generic failure so the caller
/// cannot tell a bad username from a bad password. The actual cause is
/// recorded in the security log.
pub async fn login(
    username: &str,
    password: &str,
    client_ip: &str,
) -> Result<SessionIdentity, CoordinationError> {
    let Some(user) = UserStore::get_user_by_username(username).await? else {
        audit::logon_failure("attempted user does not exist", username, client_ip);
        return Err(CoordinationError::Auth(AuthError::UserNotFound));
    };

    if !user.active {
        audit::logon_failure("attempted user is deactivated", username, client_ip);
        return Err(CoordinationError::Auth(AuthError::CredentialMismatch));
    }

    if !verify_password(password, &user.password_hash)? {
        audit::logon_failure("logon failure", username, client_ip);
        return Err(CoordinationError::Auth(AuthError::CredentialMismatch));
    }

    let company = CompanyStore::get_company(user.company_id).await?.ok_or(
        CoordinationError::ResourceNotFound {
            resource_type: "Company".to_string(),
            resource_id: user.company_id.to_string(),
        },
    )?;

    audit::logon_success(username, client_ip);
    Ok(SessionIdentity::from_user(&user, company.name))
}
