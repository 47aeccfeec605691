use tracing::{info, warn};

/// How certain the log consumer can be that a request was tampered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Malformed input; could still be an honest client gone wrong
    TamperPossible,
    /// A deliberate role or tenant mismatch
    TamperCertain,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::TamperPossible => "tamper-possible",
            Severity::TamperCertain => "tamper-certain",
        }
    }
}

pub(crate) fn logon_success(username: &str, client_ip: &str) {
    info!(
        username,
        client_ip,
        event_type = "security",
        event_category = "logon",
        success = true,
        "logon successful"
    );
}

pub(crate) fn logon_failure(message: &str, username: &str, client_ip: &str) {
    info!(
        username,
        client_ip,
        event_type = "security",
        event_category = "logon",
        security_type = "bruteforce-possible",
        success = false,
        "{message}"
    );
}

pub(crate) fn validation_warning(message: &str, username: &str, severity: Severity, client_ip: &str) {
    warn!(
        username,
        client_ip,
        event_type = "security",
        event_category = "validation",
        security_type = severity.as_str(),
        success = false,
        "{message}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::TamperPossible.as_str(), "tamper-possible");
        assert_eq!(Severity::TamperCertain.as_str(), "tamper-certain");
    }
}
