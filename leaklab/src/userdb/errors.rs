use thiserror::Error;

#[derive(Clone, Error, Debug)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<serde_json::Error> for UserError {
    fn from(err: serde_json::Error) -> Self {
        UserError::InvalidData(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<UserError>();
    }

    #[test]
    fn test_error_display() {
        assert_eq!(UserError::NotFound.to_string(), "User not found");
        assert_eq!(
            UserError::Storage("db gone".to_string()).to_string(),
            "Storage error: db gone"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let user_error = UserError::from(json_error);

        assert!(matches!(user_error, UserError::InvalidData(_)));
    }

    #[test]
    fn test_error_propagation() {
        fn validate_username(name: &str) -> Result<(), UserError> {
            if name.is_empty() {
                return Err(UserError::InvalidData(
                    "Username cannot be empty".to_string(),
                ));
            }
            Ok(())
        }

        fn process(name: &str) -> Result<String, UserError> {
            validate_username(name)?;
            Ok(format!("Processed {name}"))
        }

        assert!(process("gopher").is_ok());
        assert!(matches!(process(""), Err(UserError::InvalidData(_))));
    }
}
