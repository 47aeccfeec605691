use base64::engine::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;
use uuid::Uuid;

const COMPANY_LOCATOR_PREFIX: &str = "CompanyId:";

/// Why a client-supplied locator could not be resolved. These are
/// deliberately specific so audit logs can distinguish a curious user
/// from a tampering one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocatorError {
    #[error("Invalid encoding")]
    Encoding,

    #[error("Locator is not valid UTF-8")]
    NotUtf8,

    #[error("Locator is missing the expected prefix")]
    MissingPrefix,

    #[error("Invalid id")]
    InvalidId,

    #[error("Invalid token")]
    InvalidToken,
}

/// Encode a company id into the opaque-looking form the users listing
/// accepts. Base64 of "CompanyId:<id>", trivially reversible by design
/// of the exercise.
pub fn encode_company_locator(company_id: i64) -> String {
    STANDARD.encode(format!("{COMPANY_LOCATOR_PREFIX}{company_id}"))
}

/// Decode a company locator back to its id. Every malformed shape maps
/// to a distinct error so callers can log what the client actually sent.
pub fn decode_company_locator(locator: &str) -> Result<i64, LocatorError> {
    let decoded = STANDARD
        .decode(locator)
        .map_err(|_| LocatorError::Encoding)?;
    let text = String::from_utf8(decoded).map_err(|_| LocatorError::NotUtf8)?;

    let id = text
        .strip_prefix(COMPANY_LOCATOR_PREFIX)
        .ok_or(LocatorError::MissingPrefix)?
        .parse::<i64>()
        .map_err(|_| LocatorError::InvalidId)?;

    if id < 0 {
        return Err(LocatorError::InvalidId);
    }
    Ok(id)
}

/// Parse the plain-integer company scope the employee listing accepts
pub fn parse_employee_scope(scope: &str) -> Result<i64, LocatorError> {
    let id = scope.parse::<i64>().map_err(|_| LocatorError::InvalidId)?;
    if id < 0 {
        return Err(LocatorError::InvalidId);
    }
    Ok(id)
}

/// Parse an impersonation token into the target user's identifier
pub fn parse_impersonation_token(token: &str) -> Result<Uuid, LocatorError> {
    Uuid::parse_str(token).map_err(|_| LocatorError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_company_locator_roundtrip() {
        let locator = encode_company_locator(3);
        assert_eq!(decode_company_locator(&locator), Ok(3));
    }

    #[test]
    fn test_locator_is_standard_base64_of_prefixed_id() {
        // the exercise depends on this being decodable by hand
        assert_eq!(encode_company_locator(2), STANDARD.encode("CompanyId:2"));
    }

    #[test]
    fn test_garbage_input_is_an_encoding_error() {
        assert_eq!(
            decode_company_locator("not-base64!!"),
            Err(LocatorError::Encoding)
        );
    }

    #[test]
    fn test_missing_prefix_is_rejected() {
        let locator = STANDARD.encode("UserId:2");
        assert_eq!(
            decode_company_locator(&locator),
            Err(LocatorError::MissingPrefix)
        );
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        let locator = STANDARD.encode("CompanyId:abc");
        assert_eq!(
            decode_company_locator(&locator),
            Err(LocatorError::InvalidId)
        );
    }

    #[test]
    fn test_negative_id_is_rejected() {
        let locator = STANDARD.encode("CompanyId:-5");
        assert_eq!(
            decode_company_locator(&locator),
            Err(LocatorError::InvalidId)
        );

        assert_eq!(parse_employee_scope("-1"), Err(LocatorError::InvalidId));
    }

    #[test]
    fn test_employee_scope_accepts_plain_integers() {
        assert_eq!(parse_employee_scope("17"), Ok(17));
        assert_eq!(parse_employee_scope("17abc"), Err(LocatorError::InvalidId));
    }

    #[test]
    fn test_impersonation_token_must_be_a_uuid() {
        let uuid = Uuid::now_v7();
        assert_eq!(parse_impersonation_token(&uuid.to_string()), Ok(uuid));
        assert_eq!(
            parse_impersonation_token("definitely-not-a-uuid"),
            Err(LocatorError::InvalidToken)
        );
    }

    proptest! {
        #[test]
        fn prop_locator_roundtrip(id in 0..i64::MAX) {
            let locator = encode_company_locator(id);
            prop_assert_eq!(decode_company_locator(&locator), Ok(id));
        }
    }
}
