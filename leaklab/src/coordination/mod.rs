mod dashboard;
mod employees;
mod errors;
mod impersonate;
mod login;
mod role;
mod users;

pub use dashboard::{completed_challenges, summary_counts, DashboardSummary, HIGH_SALARY_THRESHOLD};
pub use employees::list_employees;
pub use errors::{AuthError, CoordinationError, DenyReason};
pub use impersonate::impersonate;
pub use login::login;
pub use role::{demote_self, promote_self};
pub use users::list_users;
