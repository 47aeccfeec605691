use crate::audit::{self, Severity};
use crate::locator::parse_impersonation_token;
use crate::session::SessionIdentity;
use crate::settings::{is_enforced, ChallengeKey, ChallengeTracker};
use crate::tenancy::CompanyStore;
use crate::userdb::UserStore;

use super::errors::{CoordinationError, DenyReason};

/// Resolve an impersonation token to the identity the caller should
/// assume.
///
/// All checks run before any identity is returned, so a denied request
/// leaves the caller's session untouched. The third exercise is
/// impersonating an admin of another company while enforcement is off.
pub async fn impersonate(
    actor: &SessionIdentity,
    token: &str,
    client_ip: &str,
) -> Result<SessionIdentity, CoordinationError> {
    let Ok(target_identifier) = parse_impersonation_token(token) else {
        audit::validation_warning(
            &format!("invalid impersonation token {token} for user"),
            &actor.username,
            Severity::TamperPossible,
            client_ip,
        );
        return Err(CoordinationError::Denied(DenyReason::MalformedLocator));
    };

    let target = UserStore::get_user_by_identifier(&target_identifier.to_string())
        .await?
        .ok_or(CoordinationError::ResourceNotFound {
            resource_type: "User".to_string(),
            resource_id: token.to_string(),
        })?;

    let cross_tenant = target.company_id != actor.company_id;

    if is_enforced() {
        if !actor.role.is_admin() {
            audit::validation_warning(
                "blocked impersonation by non-admin user",
                &actor.username,
                Severity::TamperCertain,
                client_ip,
            );
            return Err(CoordinationError::Denied(DenyReason::InsufficientRole));
        }
        if cross_tenant {
            audit::validation_warning(
                &format!("blocked cross-tenant impersonation of {} by user", target.username),
                &actor.username,
                Severity::TamperCertain,
                client_ip,
            );
            return Err(CoordinationError::Denied(DenyReason::TenantMismatch));
        }
    }

    if cross_tenant {
        audit::validation_warning(
            &format!("cross-tenant impersonation of {} succeeded", target.username),
            &actor.username,
            Severity::TamperCertain,
            client_ip,
        );
        if target.role.is_admin() {
            ChallengeTracker::complete(ChallengeKey::Three).await?;
        }
    }

    let company = CompanyStore::get_company(target.company_id).await?.ok_or(
        CoordinationError::ResourceNotFound {
            resource_type: "Company".to_string(),
            resource_id: target.company_id.to_string(),
        },
    )?;

    Ok(SessionIdentity::from_user(&target, company.name))
}
