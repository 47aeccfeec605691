//! Demo dataset. Two companies, a handful of accounts and a synthetic
//! personnel roster, enough to walk all three exercises.

mod names;

use chrono::{Duration, Utc};
use tracing::info;

use crate::coordination::CoordinationError;
use crate::password::hash_password;
use crate::settings::{ChallengeKey, SettingsStore};
use crate::tenancy::{Company, CompanyStore, Employee, EmployeeStore};
use crate::userdb::{Role, User, UserStore};
use crate::utils::random_bytes;

const PASSWORD_LEN: usize = 12;
const PASSWORD_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Seed the demo dataset if the store is empty. Safe to call on every
/// startup; a populated store is left untouched.
pub async fn seed_demo_data() -> Result<(), CoordinationError> {
    if CompanyStore::count_companies().await? > 0 {
        return Ok(());
    }

    seed_company(
        "LeakLab",
        "leaklab.local",
        20,
        &[("gopher", Role::Basic, true), ("gophmin", Role::Admin, false)],
    )
    .await?;
    seed_company(
        "Acme",
        "acme.local",
        13,
        &[
            ("acme-admin", Role::Admin, false),
            ("acme-user", Role::Basic, false),
        ],
    )
    .await?;

    for key in ChallengeKey::ALL {
        SettingsStore::set_setting(key.as_str(), false).await?;
    }

    info!("demo dataset seeded");
    Ok(())
}

async fn seed_company(
    name: &str,
    email_suffix: &str,
    employee_count: usize,
    accounts: &[(&str, Role, bool)],
) -> Result<(), CoordinationError> {
    let company = CompanyStore::upsert_company(Company::new(name.to_string())).await?;
    let company_id = company.id.unwrap_or_default();

    for (username, role, log_password) in accounts {
        let password = generate_password()?;
        if *log_password {
            // the published credential visitors log in with
            info!(username, password, "demo account created");
        }
        UserStore::upsert_user(User::new(
            company_id,
            username.to_string(),
            hash_password(&password)?,
            *role,
        ))
        .await?;
    }

    for _ in 0..employee_count {
        EmployeeStore::insert_employee(generate_employee(company_id, email_suffix)?).await?;
    }

    Ok(())
}

fn generate_password() -> Result<String, CoordinationError> {
    let bytes = random_bytes(PASSWORD_LEN)?;
    Ok(bytes
        .iter()
        .map(|b| PASSWORD_CHARSET[*b as usize % PASSWORD_CHARSET.len()] as char)
        .collect())
}

fn generate_employee(company_id: i64, email_suffix: &str) -> Result<Employee, CoordinationError> {
    let r = random_bytes(8)?;

    let first_name = names::FIRST_NAMES[r[0] as usize % names::FIRST_NAMES.len()];
    let last_name = names::LAST_NAMES[r[1] as usize % names::LAST_NAMES.len()];
    let email = format!(
        "{}.{}@{email_suffix}",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    );

    // US format, area 100-999 so there is no leading zero
    let area = 100 + (u16::from_be_bytes([r[2], r[3]]) % 900);
    let group = r[4] % 100;
    let serial = u16::from_be_bytes([r[5], r[6]]) % 10000;
    let ssn = format!("{area:03}-{group:02}-{serial:04}");

    let salary = 40_000.0 + (r[7] as f64 / 255.0) * 85_000.0;

    let days_back = i64::from(u16::from_be_bytes([r[2], r[5]]) % 36_500);
    let date_of_birth = (Utc::now() - Duration::days(days_back)).date_naive();

    Ok(Employee::new(
        company_id,
        first_name.to_string(),
        last_name.to_string(),
        email,
        ssn,
        salary,
        date_of_birth,
    ))
}
