use crate::audit::{self, Severity};
use crate::locator::decode_company_locator;
use crate::session::SessionIdentity;
use crate::settings::is_enforced;
use crate::tenancy::CompanyStore;
use crate::userdb::UserStore;

use super::errors::{CoordinationError, DenyReason};

/// List the user accounts of the company named by `locator`, a base64
/// company reference taken verbatim from the client.
///
/// The account listing is meant to be admin-only and tenant-scoped.
/// With enforcement off, neither property holds; anyone who decodes the
/// locator can walk every tenant.
pub async fn list_users(
    actor: &SessionIdentity,
    locator: &str,
    client_ip: &str,
) -> Result<Vec<SessionIdentity>, CoordinationError> {
    // A malformed locator is denied regardless of the enforcement flag.
    let Ok(target_company_id) = decode_company_locator(locator) else {
        audit::validation_warning(
            &format!("invalid company locator {locator} for user"),
            &actor.username,
            Severity::TamperPossible,
            client_ip,
        );
        return Err(CoordinationError::Denied(DenyReason::MalformedLocator));
    };

    let cross_tenant = target_company_id != actor.company_id;

    if is_enforced() {
        if !actor.role.is_admin() {
            audit::validation_warning(
                "blocked account listing by non-admin user",
                &actor.username,
                Severity::TamperCertain,
                client_ip,
            );
            return Err(CoordinationError::Denied(DenyReason::InsufficientRole));
        }
        if cross_tenant {
            audit::validation_warning(
                &format!(
                    "blocked cross-tenant account listing of company {target_company_id} by user"
                ),
                &actor.username,
                Severity::TamperCertain,
                client_ip,
            );
            return Err(CoordinationError::Denied(DenyReason::TenantMismatch));
        }
    }

    let company = CompanyStore::get_company(target_company_id).await?.ok_or(
        CoordinationError::ResourceNotFound {
            resource_type: "Company".to_string(),
            resource_id: target_company_id.to_string(),
        },
    )?;

    if !actor.role.is_admin() {
        audit::validation_warning(
            "account listing by non-admin user succeeded",
            &actor.username,
            Severity::TamperCertain,
            client_ip,
        );
    }
    if cross_tenant {
        audit::validation_warning(
            &format!("cross-tenant account listing of company {target_company_id} succeeded"),
            &actor.username,
            Severity::TamperCertain,
            client_ip,
        );
    }

    let users = UserStore::get_users_by_company(target_company_id).await?;
    Ok(users
        .iter()
        .map(|user| SessionIdentity::from_user(user, company.name.clone()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::encode_company_locator;
    use crate::settings::set_enforcement;
    use crate::tenancy::Company;
    use crate::test_utils::init_test_environment;
    use crate::userdb::{Role, User};
    use serial_test::serial;

    async fn seed_company_with_user(name: &str, username: &str, role: Role) -> i64 {
        let company = CompanyStore::upsert_company(Company::new(name.to_string()))
            .await
            .unwrap();
        let company_id = company.id.unwrap();
        UserStore::upsert_user(User::new(
            company_id,
            username.to_string(),
            "$argon2id$hash".to_string(),
            role,
        ))
        .await
        .unwrap();
        company_id
    }

    fn actor(company_id: i64, username: &str, role: Role) -> SessionIdentity {
        let mut user = User::new(
            company_id,
            username.to_string(),
            "$argon2id$hash".to_string(),
            role,
        );
        user.id = Some(9);
        SessionIdentity::from_user(&user, "Actor Co".to_string())
    }

    #[tokio::test]
    #[serial]
    async fn test_admin_lists_own_company_accounts() {
        init_test_environment().await;
        set_enforcement(true);

        let company_id =
            seed_company_with_user("Users Own Co", "users-own-admin", Role::Admin).await;
        let locator = encode_company_locator(company_id);

        let listed = list_users(
            &actor(company_id, "users-own-admin", Role::Admin),
            &locator,
            "10.0.0.2",
        )
        .await
        .unwrap();

        assert!(listed.iter().any(|u| u.username == "users-own-admin"));
        assert_eq!(
            serde_json::to_value(&listed[0])
                .unwrap()
                .get("password_hash"),
            None
        );

        set_enforcement(false);
    }

    #[tokio::test]
    #[serial]
    async fn test_basic_user_walks_other_tenant_when_enforcement_is_off() {
        init_test_environment().await;
        set_enforcement(false);

        let other_company_id =
            seed_company_with_user("Users Other Co", "users-other-admin", Role::Admin).await;
        let locator = encode_company_locator(other_company_id);

        let listed = list_users(
            &actor(other_company_id + 1000, "users-nosy-basic", Role::Basic),
            &locator,
            "10.0.0.2",
        )
        .await
        .unwrap();

        assert!(listed.iter().any(|u| u.username == "users-other-admin"));
    }

    #[tokio::test]
    #[serial]
    async fn test_enforcement_blocks_non_admin_and_cross_tenant() {
        init_test_environment().await;
        set_enforcement(true);

        let company_id =
            seed_company_with_user("Users Blocked Co", "users-blocked-admin", Role::Admin).await;
        let locator = encode_company_locator(company_id);

        let as_basic = list_users(
            &actor(company_id, "users-blocked-basic", Role::Basic),
            &locator,
            "10.0.0.2",
        )
        .await;
        assert!(matches!(
            as_basic,
            Err(CoordinationError::Denied(DenyReason::InsufficientRole))
        ));

        let cross_tenant = list_users(
            &actor(company_id + 1000, "users-foreign-admin", Role::Admin),
            &locator,
            "10.0.0.2",
        )
        .await;
        assert!(matches!(
            cross_tenant,
            Err(CoordinationError::Denied(DenyReason::TenantMismatch))
        ));

        set_enforcement(false);
    }

    #[tokio::test]
    #[serial]
    async fn test_malformed_locator_is_denied_even_with_enforcement_off() {
        init_test_environment().await;
        set_enforcement(false);

        let result = list_users(
            &actor(1, "users-tamperer", Role::Admin),
            "@@not-base64@@",
            "10.0.0.2",
        )
        .await;
        assert!(matches!(
            result,
            Err(CoordinationError::Denied(DenyReason::MalformedLocator))
        ));
    }
}
