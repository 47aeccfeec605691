mod errors;
mod storage;
mod types;

pub use errors::TenancyError;
pub use storage::{CompanyStore, EmployeeStore};
pub use types::{Company, Employee, EmployeeView};

/// Initialize the tenancy tables
pub async fn init() -> Result<(), TenancyError> {
    CompanyStore::init().await?;
    EmployeeStore::init().await?;
    Ok(())
}
