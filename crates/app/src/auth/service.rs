//! Sessions service.

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use thali::users::{User, UserId};
use tracing::debug;

use crate::{
    auth::{AuthServiceError, format_session_token, generate_session_secret, parse_session_token},
    database::{Db, SessionRecord},
    domain::users::UsersServiceError,
};

/// How long a token stays valid after login.
pub const DEFAULT_SESSION_TTL: SignedDuration = SignedDuration::from_hours(24 * 7);

#[derive(Debug, Clone)]
pub struct MemSessionsService {
    db: Db,
    ttl: SignedDuration,
}

impl MemSessionsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            ttl: DEFAULT_SESSION_TTL,
        }
    }

    /// Expire sessions `ttl` after they were issued.
    #[must_use]
    pub fn with_ttl(self, ttl: SignedDuration) -> Self {
        Self { ttl, ..self }
    }

    fn is_expired(&self, session: &SessionRecord, now: Timestamp) -> bool {
        now.duration_since(session.issued_at) >= self.ttl
    }
}

#[async_trait]
impl SessionsService for MemSessionsService {
    async fn start_session(&self, user: UserId) -> Result<String, AuthServiceError> {
        let secret = generate_session_secret();
        let token = format_session_token(&secret);
        let now = Timestamp::now();

        let mut sessions = self.db.sessions().write().await;
        let before = sessions.len();

        sessions.retain(|_, session| !self.is_expired(session, now));

        let pruned = before - sessions.len();
        if pruned > 0 {
            debug!(pruned, "expired sessions pruned");
        }

        sessions.insert(
            secret.digest(),
            SessionRecord {
                user,
                issued_at: now,
            },
        );

        debug!(user_id = %user, "session started");

        Ok(token)
    }

    async fn authenticate(&self, token: &str) -> Result<User, AuthServiceError> {
        let secret = parse_session_token(token).map_err(|_err| AuthServiceError::NotFound)?;
        let digest = secret.digest();

        let session = self
            .db
            .sessions()
            .read()
            .await
            .get(&digest)
            .copied()
            .ok_or(AuthServiceError::NotFound)?;

        if self.is_expired(&session, Timestamp::now()) {
            self.db.sessions().write().await.remove(&digest);

            debug!(user_id = %session.user, "session expired");

            return Err(AuthServiceError::NotFound);
        }

        self.db
            .users()
            .get(session.user)
            .await
            .map(|record| record.user)
            .ok_or(AuthServiceError::Users(UsersServiceError::NotFound))
    }

    async fn end_session(&self, token: &str) -> Result<(), AuthServiceError> {
        let secret = parse_session_token(token)?;

        let session = self
            .db
            .sessions()
            .write()
            .await
            .remove(&secret.digest())
            .ok_or(AuthServiceError::NotFound)?;

        debug!(user_id = %session.user, "session ended");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait SessionsService: Send + Sync {
    /// Opens a session for `user` and returns its bearer token.
    async fn start_session(&self, user: UserId) -> Result<String, AuthServiceError>;

    /// Resolves a bearer token to the account that owns it.
    async fn authenticate(&self, token: &str) -> Result<User, AuthServiceError>;

    /// Revokes a session token.
    async fn end_session(&self, token: &str) -> Result<(), AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::users::UsersService,
        test::{TestContext, helpers::new_user},
    };

    use super::*;

    #[tokio::test]
    async fn token_resolves_to_user() -> TestResult {
        let ctx = TestContext::new();
        let user = ctx.users.create_user(new_user("meera"), false).await?;

        let token = ctx.sessions.start_session(user.id).await?;
        let resolved = ctx.sessions.authenticate(&token).await?;

        assert_eq!(resolved, user);

        Ok(())
    }

    #[tokio::test]
    async fn only_digest_is_stored() -> TestResult {
        let ctx = TestContext::new();
        let user = ctx.users.create_user(new_user("meera"), false).await?;

        let token = ctx.sessions.start_session(user.id).await?;
        let sessions = ctx.db.sessions().read().await;

        assert_eq!(sessions.len(), 1);
        assert!(!sessions.contains_key(&token));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_or_malformed_token_is_not_found() {
        let ctx = TestContext::new();

        let zeroed = format!("ts_{}", "0".repeat(64));

        for token in ["garbage", "ts_00", zeroed.as_str()] {
            assert!(
                matches!(
                    ctx.sessions.authenticate(token).await,
                    Err(AuthServiceError::NotFound)
                ),
                "token {token} should not authenticate"
            );
        }
    }

    #[tokio::test]
    async fn ended_session_no_longer_authenticates() -> TestResult {
        let ctx = TestContext::new();
        let user = ctx.users.create_user(new_user("meera"), false).await?;
        let token = ctx.sessions.start_session(user.id).await?;

        ctx.sessions.end_session(&token).await?;

        assert!(matches!(
            ctx.sessions.authenticate(&token).await,
            Err(AuthServiceError::NotFound)
        ));
        assert!(matches!(
            ctx.sessions.end_session(&token).await,
            Err(AuthServiceError::NotFound)
        ));

        Ok(())
    }

    #[tokio::test]
    async fn expired_session_is_rejected_and_dropped() -> TestResult {
        let ctx = TestContext::new();
        let user = ctx.users.create_user(new_user("meera"), false).await?;
        let sessions = MemSessionsService::new(ctx.db.clone()).with_ttl(SignedDuration::ZERO);

        let token = sessions.start_session(user.id).await?;

        assert!(matches!(
            sessions.authenticate(&token).await,
            Err(AuthServiceError::NotFound)
        ));
        assert!(ctx.db.sessions().read().await.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn starting_a_session_prunes_stale_ones() -> TestResult {
        let ctx = TestContext::new();
        let user = ctx.users.create_user(new_user("meera"), false).await?;

        ctx.db.sessions().write().await.insert(
            "stale".to_string(),
            SessionRecord {
                user: user.id,
                issued_at: Timestamp::UNIX_EPOCH,
            },
        );

        let token = ctx.sessions.start_session(user.id).await?;

        let stored = ctx.db.sessions().read().await;

        assert_eq!(stored.len(), 1);
        assert!(!stored.contains_key("stale"));
        drop(stored);

        assert_eq!(ctx.sessions.authenticate(&token).await?, user);

        Ok(())
    }
}
