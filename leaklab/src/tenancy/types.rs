use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tenant. Every user and employee row belongs to exactly one company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Company {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub identifier: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Company {
    pub fn new(name: String) -> Self {
        Self {
            id: None,
            identifier: Uuid::now_v7().to_string(),
            name,
            created_at: Utc::now(),
        }
    }
}

/// Sensitive personnel record. Raw fields never leave this module layer
/// unmasked; callers receive [`EmployeeView`] instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub identifier: String,
    pub company_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub ssn: String,
    pub salary: f64,
    pub date_of_birth: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    pub fn new(
        company_id: i64,
        first_name: String,
        last_name: String,
        email: String,
        ssn: String,
        salary: f64,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            identifier: Uuid::now_v7().to_string(),
            company_id,
            first_name,
            last_name,
            email,
            ssn,
            salary,
            date_of_birth,
            created_at: Utc::now(),
        }
    }
}

/// Display projection of an employee. The SSN keeps only its last group,
/// salary and date of birth are pre-formatted strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmployeeView {
    pub identifier: String,
    pub company_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub display_ssn: String,
    pub display_salary: String,
    pub display_dob: String,
}

impl From<Employee> for EmployeeView {
    fn from(employee: Employee) -> Self {
        let last_group = employee.ssn.rsplit('-').next().unwrap_or("");
        Self {
            identifier: employee.identifier,
            company_id: employee.company_id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            display_ssn: format!("###-##-{last_group}"),
            display_salary: format!("${:.2}", employee.salary),
            display_dob: employee.date_of_birth.format("%m/%d/%Y").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_employee() -> Employee {
        Employee::new(
            7,
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada.lovelace@acme.local".to_string(),
            "123-45-6789".to_string(),
            98500.5,
            NaiveDate::from_ymd_opt(1985, 12, 10).unwrap(),
        )
    }

    #[test]
    fn test_view_masks_all_but_last_ssn_group() {
        let view = EmployeeView::from(sample_employee());
        assert_eq!(view.display_ssn, "###-##-6789");
    }

    #[test]
    fn test_view_formats_salary_and_dob() {
        let view = EmployeeView::from(sample_employee());
        assert_eq!(view.display_salary, "$98500.50");
        assert_eq!(view.display_dob, "12/10/1985");
    }

    #[test]
    fn test_view_carries_no_raw_sensitive_fields() {
        let view = EmployeeView::from(sample_employee());
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("ssn").is_none());
        assert!(json.get("salary").is_none());
        assert!(json.get("date_of_birth").is_none());
    }

    #[test]
    fn test_company_new_assigns_identifier() {
        let a = Company::new("LeakLab".to_string());
        let b = Company::new("Acme".to_string());
        assert!(a.id.is_none());
        assert_ne!(a.identifier, b.identifier);
    }
}
