use sqlx::{FromRow, PgPool};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::auth::repo::User;

/// Name of the opaque session cookie.
pub const SESSION_COOKIE: &str = "session_id";

/// Server-side session row. The cookie carries only the token; identity and
/// expiry live here.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub token: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub expires_at: OffsetDateTime,
}

impl Session {
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expires_at <= now
    }

    pub async fn create(db: &PgPool, user: &User, ttl_hours: i64) -> anyhow::Result<Session> {
        let token = Uuid::new_v4();
        let expires_at = OffsetDateTime::now_utc() + Duration::hours(ttl_hours);
        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (token, user_id, username, expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING token, user_id, username, expires_at
            "#,
        )
        .bind(token)
        .bind(user.id)
        .bind(&user.username)
        .bind(expires_at)
        .fetch_one(db)
        .await?;
        Ok(session)
    }

    pub async fn find(db: &PgPool, token: Uuid) -> anyhow::Result<Option<Session>> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            SELECT token, user_id, username, expires_at
            FROM sessions
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(db)
        .await?;
        Ok(session)
    }

    pub async fn delete(db: &PgPool, token: Uuid) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_expiring_at(expires_at: OffsetDateTime) -> Session {
        Session {
            token: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            username: "alice".into(),
            expires_at,
        }
    }

    #[test]
    fn future_expiry_is_live() {
        let now = OffsetDateTime::now_utc();
        let s = session_expiring_at(now + Duration::hours(24));
        assert!(!s.is_expired(now));
    }

    #[test]
    fn past_expiry_is_expired() {
        let now = OffsetDateTime::now_utc();
        let s = session_expiring_at(now - Duration::seconds(1));
        assert!(s.is_expired(now));
    }

    #[test]
    fn expiry_boundary_counts_as_expired() {
        let now = OffsetDateTime::now_utc();
        let s = session_expiring_at(now);
        assert!(s.is_expired(now));
    }
}
