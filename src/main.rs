mod app;
mod auth;
mod bills;
mod budget;
mod config;
mod dto;
mod error;
mod expenses;
mod meals;
mod notes;
mod routines;
mod sanitize;
mod state;
mod todos;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "homedash=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let app_state = AppState::init().await?;

    if let Err(e) = sqlx::migrate!("./migrations").run(&app_state.db).await {
        tracing::warn!(error = %e, "migrations folder not found or migration failed; continuing");
    }

    if let Some(seed) = app_state.config.seed_user.clone() {
        if let Err(e) = auth::repo::seed_user(&app_state.db, &seed.username, &seed.password).await {
            tracing::error!(error = %e, "failed to create dev seed user");
        }
    }

    let app = app::build_app(app_state);
    app::serve(app).await
}
