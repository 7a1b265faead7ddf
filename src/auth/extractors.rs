use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    auth::session::{Session, SESSION_COOKIE},
    error::ApiError,
    state::AppState,
};

/// Resolves the session cookie to the authenticated user's id.
///
/// Handlers never accept a client-supplied owner id; every owner-scoped query
/// binds the id extracted here.
pub struct AuthUser(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .and_then(|c| Uuid::parse_str(c.value()).ok())
            .ok_or_else(unauthenticated)?;

        let session = Session::find(&state.db, token)
            .await
            .map_err(ApiError::internal("Internal server error"))?
            .ok_or_else(unauthenticated)?;

        if session.is_expired(OffsetDateTime::now_utc()) {
            // Lazy purge; expired rows are useless either way.
            let _ = Session::delete(&state.db, token).await;
            return Err(unauthenticated());
        }

        Ok(AuthUser(session.user_id))
    }
}

fn unauthenticated() -> ApiError {
    ApiError::Auth("Authentication required".into())
}
