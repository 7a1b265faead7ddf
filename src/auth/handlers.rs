use axum::{extract::State, routing::post, Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::{
        dto::{validate_password, validate_username, LoginRequest, RegisterRequest},
        password::{hash_password, verify_password},
        repo::User,
        session::{Session, SESSION_COOKIE},
    },
    dto::StatusResponse,
    error::{ApiError, ApiResult},
    sanitize,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let username = sanitize::clean(&payload.username);

    if username.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation(
            "Username and password are required".into(),
        ));
    }
    validate_username(&username)?;
    validate_password(&payload.password)?;

    if User::find_by_username(&state.db, &username)
        .await
        .map_err(ApiError::internal("Internal server error"))?
        .is_some()
    {
        warn!(%username, "username already taken");
        return Err(ApiError::Conflict("Username already exists".into()));
    }

    let hash =
        hash_password(&payload.password).map_err(ApiError::internal("Internal server error"))?;
    let user = User::create(&state.db, &username, &hash)
        .await
        .map_err(ApiError::internal("Internal server error"))?;

    info!(user_id = %user.id, %username, "user registered");
    Ok(Json(StatusResponse::ok("User registered successfully")))
}

#[instrument(skip(state, jar, payload))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<(CookieJar, Json<StatusResponse>)> {
    let username = sanitize::clean(&payload.username);

    if username.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation(
            "Username and password are required".into(),
        ));
    }

    // Unknown user and bad password are indistinguishable to the caller.
    let user = match User::find_by_username(&state.db, &username)
        .await
        .map_err(ApiError::internal("Internal server error"))?
    {
        Some(u) => u,
        None => {
            warn!(%username, "login for unknown username");
            return Err(ApiError::Auth("Invalid username or password".into()));
        }
    };

    let ok = verify_password(&payload.password, &user.password_hash)
        .map_err(ApiError::internal("Internal server error"))?;
    if !ok {
        warn!(user_id = %user.id, "login with invalid password");
        return Err(ApiError::Auth("Invalid username or password".into()));
    }

    let ttl_hours = state.config.session_ttl_hours;
    let session = Session::create(&state.db, &user, ttl_hours)
        .await
        .map_err(ApiError::internal("Internal server error"))?;

    info!(user_id = %user.id, %username, "user logged in");
    Ok((
        jar.add(session_cookie(session.token, ttl_hours)),
        Json(StatusResponse::ok("Login successful")),
    ))
}

#[instrument(skip(state, jar))]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<StatusResponse>)> {
    if let Some(token) = jar
        .get(SESSION_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok())
    {
        if let Err(e) = Session::delete(&state.db, token).await {
            error!(error = %e, "session destroy failed");
            return Err(ApiError::Internal("Logout failed".into()));
        }
    }

    Ok((
        jar.remove(Cookie::build(SESSION_COOKIE).path("/")),
        Json(StatusResponse::ok("Logout successful")),
    ))
}

fn session_cookie(token: Uuid, ttl_hours: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(Duration::hours(ttl_hours))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_attributes() {
        let token = Uuid::new_v4();
        let cookie = session_cookie(token, 24);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), token.to_string());
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.max_age(), Some(Duration::hours(24)));
        assert_eq!(cookie.path(), Some("/"));
    }
}
