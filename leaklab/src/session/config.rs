use std::env;
use std::sync::LazyLock;

/// Session lifetime in seconds. `LEAKLAB_SESSION_TTL` overrides the
/// one-hour default.
pub static SESSION_TTL: LazyLock<u64> = LazyLock::new(|| {
    env::var("LEAKLAB_SESSION_TTL")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(3600)
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ttl_is_positive() {
        assert!(*SESSION_TTL > 0);
    }
}
