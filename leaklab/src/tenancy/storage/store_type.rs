use crate::storage::GENERIC_DATA_STORE;
use crate::tenancy::{
    errors::TenancyError,
    types::{Company, Employee, EmployeeView},
};

use super::postgres::*;
use super::sqlite::*;

pub struct CompanyStore;

impl CompanyStore {
    /// Initialize the company table
    pub async fn init() -> Result<(), TenancyError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            create_company_table_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            create_company_table_postgres(pool).await
        } else {
            Err(TenancyError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Create or update a company, keyed by the opaque identifier
    pub async fn upsert_company(company: Company) -> Result<Company, TenancyError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            upsert_company_sqlite(pool, company).await
        } else if let Some(pool) = store.as_postgres() {
            upsert_company_postgres(pool, company).await
        } else {
            Err(TenancyError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Get a company by numeric id
    pub async fn get_company(id: i64) -> Result<Option<Company>, TenancyError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_company_sqlite(pool, id).await
        } else if let Some(pool) = store.as_postgres() {
            get_company_postgres(pool, id).await
        } else {
            Err(TenancyError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Count all companies. Demo seeding uses this to decide whether the
    /// store is already populated.
    pub async fn count_companies() -> Result<i64, TenancyError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            count_companies_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            count_companies_postgres(pool).await
        } else {
            Err(TenancyError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }
}

pub struct EmployeeStore;

impl EmployeeStore {
    /// Initialize the employee table
    pub async fn init() -> Result<(), TenancyError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            create_employee_table_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            create_employee_table_postgres(pool).await
        } else {
            Err(TenancyError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    pub async fn insert_employee(employee: Employee) -> Result<Employee, TenancyError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            insert_employee_sqlite(pool, employee).await
        } else if let Some(pool) = store.as_postgres() {
            insert_employee_postgres(pool, employee).await
        } else {
            Err(TenancyError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// List a company's employees as masked display projections
    pub async fn get_employees_by_company(
        company_id: i64,
    ) -> Result<Vec<EmployeeView>, TenancyError> {
        let store = GENERIC_DATA_STORE.lock().await;

        let employees = if let Some(pool) = store.as_sqlite() {
            get_employees_by_company_sqlite(pool, company_id).await?
        } else if let Some(pool) = store.as_postgres() {
            get_employees_by_company_postgres(pool, company_id).await?
        } else {
            return Err(TenancyError::Storage(
                "Unsupported database type".to_string(),
            ));
        };

        Ok(employees.into_iter().map(EmployeeView::from).collect())
    }

    pub async fn count_employees(company_id: i64) -> Result<i64, TenancyError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            count_employees_sqlite(pool, company_id, None).await
        } else if let Some(pool) = store.as_postgres() {
            count_employees_postgres(pool, company_id, None).await
        } else {
            Err(TenancyError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Count employees at or above the given salary threshold
    pub async fn count_high_salary(company_id: i64, threshold: f64) -> Result<i64, TenancyError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            count_employees_sqlite(pool, company_id, Some(threshold)).await
        } else if let Some(pool) = store.as_postgres() {
            count_employees_postgres(pool, company_id, Some(threshold)).await
        } else {
            Err(TenancyError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_test_environment;
    use chrono::NaiveDate;
    use serial_test::serial;

    fn test_employee(company_id: i64, salary: f64) -> Employee {
        Employee::new(
            company_id,
            "Grace".to_string(),
            "Hopper".to_string(),
            "grace.hopper@leaklab.local".to_string(),
            "219-09-9999".to_string(),
            salary,
            NaiveDate::from_ymd_opt(1960, 12, 9).unwrap(),
        )
    }

    #[tokio::test]
    #[serial]
    async fn test_upsert_and_get_company() {
        init_test_environment().await;

        let stored = CompanyStore::upsert_company(Company::new("Globex".to_string()))
            .await
            .unwrap();
        let id = stored.id.expect("upsert should assign an id");

        let fetched = CompanyStore::get_company(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Globex");
        assert_eq!(fetched.identifier, stored.identifier);
    }

    #[tokio::test]
    #[serial]
    async fn test_get_company_missing_is_none() {
        init_test_environment().await;

        assert!(CompanyStore::get_company(i64::MAX).await.unwrap().is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_employee_listing_is_masked_and_scoped() {
        init_test_environment().await;

        let company_id = 7101;
        let other_company_id = 7102;
        EmployeeStore::insert_employee(test_employee(company_id, 88000.0))
            .await
            .unwrap();
        EmployeeStore::insert_employee(test_employee(company_id, 123000.0))
            .await
            .unwrap();
        EmployeeStore::insert_employee(test_employee(other_company_id, 50000.0))
            .await
            .unwrap();

        let views = EmployeeStore::get_employees_by_company(company_id)
            .await
            .unwrap();
        assert_eq!(views.len(), 2);
        assert!(views.iter().all(|v| v.company_id == company_id));
        assert!(views.iter().all(|v| v.display_ssn == "###-##-9999"));
    }

    #[tokio::test]
    #[serial]
    async fn test_high_salary_count_uses_threshold_inclusively() {
        init_test_environment().await;

        let company_id = 7103;
        EmployeeStore::insert_employee(test_employee(company_id, 99999.99))
            .await
            .unwrap();
        EmployeeStore::insert_employee(test_employee(company_id, 100000.0))
            .await
            .unwrap();
        EmployeeStore::insert_employee(test_employee(company_id, 124999.0))
            .await
            .unwrap();

        assert_eq!(
            EmployeeStore::count_employees(company_id).await.unwrap(),
            3
        );
        assert_eq!(
            EmployeeStore::count_high_salary(company_id, 100_000.0)
                .await
                .unwrap(),
            2
        );
    }
}
