use std::net::SocketAddr;

use axum::{
    response::{IntoResponse, Redirect},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    auth, bills, budget, error::ApiError, expenses, meals, notes, routines, state::AppState, todos,
};

pub fn build_app(state: AppState) -> Router {
    let api = Router::new()
        .merge(auth::router())
        .merge(expenses::router())
        .merge(budget::router())
        .merge(routines::router())
        .merge(notes::router())
        .merge(todos::router())
        .merge(bills::router())
        .merge(meals::router())
        .fallback(api_not_found);

    Router::new()
        .nest("/api", api)
        .fallback(redirect_to_login)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}

async fn api_not_found() -> impl IntoResponse {
    ApiError::NotFound("API endpoint not found".into())
}

// Unauthenticated navigation lands on the login document, served elsewhere.
async fn redirect_to_login() -> Redirect {
    Redirect::to("/login.html")
}

pub async fn serve(app: Router) -> anyhow::Result<()> {
    let addr: SocketAddr = format!(
        "{}:{}",
        std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
        std::env::var("APP_PORT").unwrap_or_else(|_| "8080".into())
    )
    .parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
