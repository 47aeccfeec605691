use serde::Serialize;

use crate::session::SessionIdentity;
use crate::settings::{ChallengeTracker, CompletedChallenges};
use crate::tenancy::EmployeeStore;
use crate::userdb::UserStore;

use super::errors::CoordinationError;

/// Salary at or above which an employee counts as highly compensated
pub const HIGH_SALARY_THRESHOLD: f64 = 100_000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub employee_count: i64,
    pub high_salary_count: i64,
    pub user_count: i64,
    pub admin_count: i64,
}

/// Aggregate counts for the actor's own company. Always tenant-scoped;
/// there is no client-supplied locator to tamper with here.
pub async fn summary_counts(
    actor: &SessionIdentity,
) -> Result<DashboardSummary, CoordinationError> {
    let company_id = actor.company_id;

    Ok(DashboardSummary {
        employee_count: EmployeeStore::count_employees(company_id).await?,
        high_salary_count: EmployeeStore::count_high_salary(company_id, HIGH_SALARY_THRESHOLD)
            .await?,
        user_count: UserStore::count_users(company_id).await?,
        admin_count: UserStore::count_admins(company_id).await?,
    })
}

/// Completion state of the three exercises, shared by all visitors
pub async fn completed_challenges() -> Result<CompletedChallenges, CoordinationError> {
    Ok(ChallengeTracker::completed().await?)
}
