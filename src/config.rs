use serde::Deserialize;

/// Development-only bootstrap account, created at startup when enabled.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub session_ttl_hours: i64,
    pub seed_user: Option<SeedUser>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let session_ttl_hours = std::env::var("SESSION_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(24);
        // Off unless explicitly requested; never enable in production.
        let seed_user = if std::env::var("DEV_SEED_USER")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false)
        {
            Some(SeedUser {
                username: std::env::var("DEV_SEED_USERNAME").unwrap_or_else(|_| "prajwal".into()),
                password: std::env::var("DEV_SEED_PASSWORD").unwrap_or_else(|_| "1234".into()),
            })
        } else {
            None
        };
        Ok(Self {
            database_url,
            session_ttl_hours,
            seed_user,
        })
    }
}
