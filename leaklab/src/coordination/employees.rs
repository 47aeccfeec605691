use crate::audit::{self, Severity};
use crate::locator::parse_employee_scope;
use crate::session::SessionIdentity;
use crate::settings::{is_enforced, ChallengeKey, ChallengeTracker};
use crate::tenancy::{EmployeeStore, EmployeeView};

use super::errors::{CoordinationError, DenyReason};

/// List the employees of the company named by `scope`, a plain integer
/// company id taken verbatim from the client.
///
/// This is the first exercise: with enforcement off, nothing stops a
/// logged-in user from reading another tenant's roster.
pub async fn list_employees(
    actor: &SessionIdentity,
    scope: &str,
    client_ip: &str,
) -> Result<Vec<EmployeeView>, CoordinationError> {
    // A malformed scope is denied no matter what the enforcement flag
    // says. The UI only ever emits the actor's own company id.
    let Ok(target_company_id) = parse_employee_scope(scope) else {
        audit::validation_warning(
            &format!("invalid company id {scope} for user"),
            &actor.username,
            Severity::TamperPossible,
            client_ip,
        );
        return Err(CoordinationError::Denied(DenyReason::MalformedLocator));
    };

    let cross_tenant = target_company_id != actor.company_id;

    if is_enforced() && cross_tenant {
        audit::validation_warning(
            &format!(
                "blocked cross-tenant employee listing of company {target_company_id} by user"
            ),
            &actor.username,
            Severity::TamperCertain,
            client_ip,
        );
        return Err(CoordinationError::Denied(DenyReason::TenantMismatch));
    }

    let employees = EmployeeStore::get_employees_by_company(target_company_id).await?;

    if cross_tenant {
        audit::validation_warning(
            &format!("cross-tenant employee listing of company {target_company_id} succeeded"),
            &actor.username,
            Severity::TamperCertain,
            client_ip,
        );
        ChallengeTracker::complete(ChallengeKey::One).await?;
    }

    Ok(employees)
}
