use chrono::Utc;

use crate::storage::GENERIC_CACHE_STORE;
use crate::utils::gen_random_string;

use super::config::SESSION_TTL;
use super::errors::SessionError;
use super::types::{SessionIdentity, StoredSession};

const CACHE_PREFIX: &str = "session";

/// Store a new session and return its opaque token
pub async fn create_session(identity: SessionIdentity) -> Result<String, SessionError> {
    let token = gen_random_string(32)?;
    let session = StoredSession::new(identity, *SESSION_TTL);
    let ttl = session.ttl;

    GENERIC_CACHE_STORE
        .lock()
        .await
        .put_with_ttl(CACHE_PREFIX, &token, session.try_into()?, ttl as usize)
        .await?;

    Ok(token)
}

/// Resolve a token to its identity. Expired sessions are removed and
/// read as absent.
pub async fn get_session_identity(token: &str) -> Result<Option<SessionIdentity>, SessionError> {
    let data = GENERIC_CACHE_STORE
        .lock()
        .await
        .get(CACHE_PREFIX, token)
        .await?;

    let Some(data) = data else {
        return Ok(None);
    };

    let session = StoredSession::try_from(data)?;
    if session.expires_at <= Utc::now() {
        GENERIC_CACHE_STORE
            .lock()
            .await
            .remove(CACHE_PREFIX, token)
            .await?;
        return Ok(None);
    }

    Ok(Some(session.identity))
}

/// Swap the identity stored under an existing token, keeping the
/// original expiry. Fails with `NotFound` when the token is dead.
pub async fn replace_session_identity(
    token: &str,
    identity: SessionIdentity,
) -> Result<(), SessionError> {
    let mut store = GENERIC_CACHE_STORE.lock().await;

    let data = store.get(CACHE_PREFIX, token).await?;
    let Some(data) = data else {
        return Err(SessionError::NotFound);
    };

    let mut session = StoredSession::try_from(data)?;
    if session.expires_at <= Utc::now() {
        store.remove(CACHE_PREFIX, token).await?;
        return Err(SessionError::NotFound);
    }

    session.identity = identity;
    let ttl = session.ttl;
    store
        .put_with_ttl(CACHE_PREFIX, token, session.try_into()?, ttl as usize)
        .await?;

    Ok(())
}

/// Drop a session. Deleting an unknown token is not an error.
pub async fn delete_session(token: &str) -> Result<(), SessionError> {
    GENERIC_CACHE_STORE
        .lock()
        .await
        .remove(CACHE_PREFIX, token)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_test_environment;
    use crate::userdb::{Role, User};
    use serial_test::serial;

    fn identity_for(username: &str, role: Role) -> SessionIdentity {
        let mut user = User::new(
            11,
            username.to_string(),
            "$argon2id$hash".to_string(),
            role,
        );
        user.id = Some(42);
        SessionIdentity::from_user(&user, "LeakLab".to_string())
    }

    #[tokio::test]
    #[serial]
    async fn test_create_and_resolve_session() {
        init_test_environment().await;

        let identity = identity_for("session-user", Role::Basic);
        let token = create_session(identity.clone()).await.unwrap();

        let resolved = get_session_identity(&token).await.unwrap().unwrap();
        assert_eq!(resolved, identity);
    }

    #[tokio::test]
    #[serial]
    async fn test_tokens_are_unique_and_opaque() {
        init_test_environment().await;

        let identity = identity_for("token-user", Role::Basic);
        let a = create_session(identity.clone()).await.unwrap();
        let b = create_session(identity).await.unwrap();

        assert_ne!(a, b);
        assert!(!a.contains("token-user"));
    }

    #[tokio::test]
    #[serial]
    async fn test_unknown_token_resolves_to_none() {
        init_test_environment().await;

        assert!(
            get_session_identity("no-such-token")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_replace_identity_under_live_token() {
        init_test_environment().await;

        let token = create_session(identity_for("before", Role::Basic))
            .await
            .unwrap();

        let replacement = identity_for("after", Role::Admin);
        replace_session_identity(&token, replacement.clone())
            .await
            .unwrap();

        let resolved = get_session_identity(&token).await.unwrap().unwrap();
        assert_eq!(resolved.username, "after");
        assert_eq!(resolved.role, Role::Admin);
    }

    #[tokio::test]
    #[serial]
    async fn test_replace_identity_under_dead_token_fails() {
        init_test_environment().await;

        let result =
            replace_session_identity("dead-token", identity_for("ghost", Role::Basic)).await;
        assert!(matches!(result, Err(SessionError::NotFound)));
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_session_removes_it() {
        init_test_environment().await;

        let token = create_session(identity_for("short-lived", Role::Basic))
            .await
            .unwrap();
        delete_session(&token).await.unwrap();

        assert!(get_session_identity(&token).await.unwrap().is_none());
        // deleting again is harmless
        delete_session(&token).await.unwrap();
    }
}
