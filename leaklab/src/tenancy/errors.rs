use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum TenancyError {
    #[error("Company not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(TenancyError::NotFound.to_string(), "Company not found");
        assert_eq!(
            TenancyError::Storage("db gone".to_string()).to_string(),
            "Storage error: db gone"
        );
    }
}
