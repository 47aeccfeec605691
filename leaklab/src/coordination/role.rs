use crate::audit::{self, Severity};
use crate::session::SessionIdentity;
use crate::settings::{ChallengeKey, ChallengeTracker};
use crate::userdb::{Role, UserStore};

use super::errors::CoordinationError;

/// Set the actor's own role to Admin.
///
/// This is the second exercise: the operation performs no authorization
/// check at all, so it succeeds even with enforcement on. Detection is
/// the point; the escalation is loud in the security log.
pub async fn promote_self(
    actor: &SessionIdentity,
    client_ip: &str,
) -> Result<SessionIdentity, CoordinationError> {
    UserStore::update_user_role(actor.user_id, Role::Admin).await?;

    if actor.role == Role::Basic {
        audit::validation_warning(
            "user promoted themselves to admin",
            &actor.username,
            Severity::TamperCertain,
            client_ip,
        );
        ChallengeTracker::complete(ChallengeKey::Two).await?;
    }

    let mut updated = actor.clone();
    updated.role = Role::Admin;
    Ok(updated)
}

/// Set the actor's own role back to Basic. Same missing check as
/// [`promote_self`], but demotion is not worth a challenge.
pub async fn demote_self(
    actor: &SessionIdentity,
    client_ip: &str,
) -> Result<SessionIdentity, CoordinationError> {
    UserStore::update_user_role(actor.user_id, Role::Basic).await?;

    if actor.role == Role::Admin {
        audit::validation_warning(
            "user demoted themselves to basic",
            &actor.username,
            Severity::TamperPossible,
            client_ip,
        );
    }

    let mut updated = actor.clone();
    updated.role = Role::Basic;
    Ok(updated)
}
