//! Database table configuration

use std::env;
use std::sync::LazyLock;

/// Table prefix from environment variable
pub(crate) static TABLE_PREFIX: LazyLock<String> =
    LazyLock::new(|| env::var("LEAKLAB_TABLE_PREFIX").unwrap_or_else(|_| "ll_".to_string()));

/// Users table name
pub(crate) static DB_TABLE_USERS: LazyLock<String> = LazyLock::new(|| {
    env::var("LEAKLAB_TABLE_USERS").unwrap_or_else(|_| format!("{}{}", *TABLE_PREFIX, "users"))
});

/// Companies table name
pub(crate) static DB_TABLE_COMPANIES: LazyLock<String> = LazyLock::new(|| {
    env::var("LEAKLAB_TABLE_COMPANIES")
        .unwrap_or_else(|_| format!("{}{}", *TABLE_PREFIX, "companies"))
});

/// Employees table name
pub(crate) static DB_TABLE_EMPLOYEES: LazyLock<String> = LazyLock::new(|| {
    env::var("LEAKLAB_TABLE_EMPLOYEES")
        .unwrap_or_else(|_| format!("{}{}", *TABLE_PREFIX, "employees"))
});

/// Settings table name (challenge completion flags)
pub(crate) static DB_TABLE_SETTINGS: LazyLock<String> = LazyLock::new(|| {
    env::var("LEAKLAB_TABLE_SETTINGS")
        .unwrap_or_else(|_| format!("{}{}", *TABLE_PREFIX, "settings"))
});

#[cfg(test)]
mod tests {
    use std::env;

    #[test]
    fn test_table_prefix_default() {
        // The LazyLock may already be initialized, so test the same logic it uses
        let prefix = env::var("LEAKLAB_TABLE_PREFIX_UNSET_FOR_TEST")
            .unwrap_or_else(|_| "ll_".to_string());
        assert_eq!(prefix, "ll_");
    }

    #[test]
    fn test_table_names_carry_prefix() {
        let prefix = "ll_";
        assert_eq!(format!("{}{}", prefix, "users"), "ll_users");
        assert_eq!(format!("{}{}", prefix, "companies"), "ll_companies");
        assert_eq!(format!("{}{}", prefix, "employees"), "ll_employees");
        assert_eq!(format!("{}{}", prefix, "settings"), "ll_settings");
    }
}
