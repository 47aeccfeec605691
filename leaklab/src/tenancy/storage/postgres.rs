use sqlx::{Pool, Postgres};

use crate::storage::{DB_TABLE_COMPANIES, DB_TABLE_EMPLOYEES};
use crate::tenancy::{
    errors::TenancyError,
    types::{Company, Employee},
};

pub(super) async fn create_company_table_postgres(
    pool: &Pool<Postgres>,
) -> Result<(), TenancyError> {
    let table_name = DB_TABLE_COMPANIES.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id BIGSERIAL PRIMARY KEY,
            identifier TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| TenancyError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn upsert_company_postgres(
    pool: &Pool<Postgres>,
    mut company: Company,
) -> Result<Company, TenancyError> {
    let table_name = DB_TABLE_COMPANIES.as_str();

    let id = sqlx::query_scalar::<_, i64>(&format!(
        r#"
        INSERT INTO {table_name} (identifier, name, created_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (identifier) DO UPDATE SET
            name = EXCLUDED.name
        RETURNING id
        "#
    ))
    .bind(&company.identifier)
    .bind(&company.name)
    .bind(company.created_at)
    .fetch_one(pool)
    .await
    .map_err(|e| TenancyError::Storage(e.to_string()))?;

    company.id = Some(id);
    Ok(company)
}

pub(super) async fn get_company_postgres(
    pool: &Pool<Postgres>,
    id: i64,
) -> Result<Option<Company>, TenancyError> {
    let table_name = DB_TABLE_COMPANIES.as_str();

    sqlx::query_as::<_, Company>(&format!("SELECT * FROM {table_name} WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| TenancyError::Storage(e.to_string()))
}

pub(super) async fn count_companies_postgres(pool: &Pool<Postgres>) -> Result<i64, TenancyError> {
    let table_name = DB_TABLE_COMPANIES.as_str();

    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table_name}"))
        .fetch_one(pool)
        .await
        .map_err(|e| TenancyError::Storage(e.to_string()))
}

pub(super) async fn create_employee_table_postgres(
    pool: &Pool<Postgres>,
) -> Result<(), TenancyError> {
    let table_name = DB_TABLE_EMPLOYEES.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id BIGSERIAL PRIMARY KEY,
            identifier TEXT NOT NULL UNIQUE,
            company_id BIGINT NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL,
            ssn TEXT NOT NULL,
            salary DOUBLE PRECISION NOT NULL,
            date_of_birth DATE NOT NULL,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| TenancyError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn insert_employee_postgres(
    pool: &Pool<Postgres>,
    mut employee: Employee,
) -> Result<Employee, TenancyError> {
    let table_name = DB_TABLE_EMPLOYEES.as_str();

    let id = sqlx::query_scalar::<_, i64>(&format!(
        r#"
        INSERT INTO {table_name}
            (identifier, company_id, first_name, last_name, email, ssn, salary, date_of_birth, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id
        "#
    ))
    .bind(&employee.identifier)
    .bind(employee.company_id)
    .bind(&employee.first_name)
    .bind(&employee.last_name)
    .bind(&employee.email)
    .bind(&employee.ssn)
    .bind(employee.salary)
    .bind(employee.date_of_birth)
    .bind(employee.created_at)
    .fetch_one(pool)
    .await
    .map_err(|e| TenancyError::Storage(e.to_string()))?;

    employee.id = Some(id);
    Ok(employee)
}

pub(super) async fn get_employees_by_company_postgres(
    pool: &Pool<Postgres>,
    company_id: i64,
) -> Result<Vec<Employee>, TenancyError> {
    let table_name = DB_TABLE_EMPLOYEES.as_str();

    sqlx::query_as::<_, Employee>(&format!(
        "SELECT * FROM {table_name} WHERE company_id = $1 ORDER BY id"
    ))
    .bind(company_id)
    .fetch_all(pool)
    .await
    .map_err(|e| TenancyError::Storage(e.to_string()))
}

pub(super) async fn count_employees_postgres(
    pool: &Pool<Postgres>,
    company_id: i64,
    min_salary: Option<f64>,
) -> Result<i64, TenancyError> {
    let table_name = DB_TABLE_EMPLOYEES.as_str();

    let count = match min_salary {
        Some(threshold) => sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM {table_name} WHERE company_id = $1 AND salary >= $2"
        ))
        .bind(company_id)
        .bind(threshold)
        .fetch_one(pool)
        .await
        .map_err(|e| TenancyError::Storage(e.to_string()))?,
        None => sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM {table_name} WHERE company_id = $1"
        ))
        .bind(company_id)
        .fetch_one(pool)
        .await
        .map_err(|e| TenancyError::Storage(e.to_string()))?,
    };

    Ok(count)
}
