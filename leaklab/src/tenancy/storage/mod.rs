mod postgres;
mod sqlite;
mod store_type;

pub use store_type::{CompanyStore, EmployeeStore};
