use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Fallback when a user never configured a budget.
pub fn default_monthly_budget() -> Decimal {
    Decimal::from(500)
}

#[derive(Debug, Clone, FromRow)]
pub struct Budget {
    pub user_id: Uuid,
    pub monthly_budget: Decimal,
}

impl Budget {
    pub async fn for_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<Budget>> {
        let row = sqlx::query_as::<_, Budget>(
            r#"
            SELECT user_id, monthly_budget
            FROM user_budgets
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// One row per owner; insert or replace.
    pub async fn upsert(db: &PgPool, user_id: Uuid, monthly_budget: Decimal) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO user_budgets (user_id, monthly_budget)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET monthly_budget = EXCLUDED.monthly_budget
            "#,
        )
        .bind(user_id)
        .bind(monthly_budget)
        .execute(db)
        .await?;
        Ok(())
    }
}

/// The effective budget for a user, applying the 500-unit default.
pub async fn effective_budget(db: &PgPool, user_id: Uuid) -> anyhow::Result<Decimal> {
    Ok(Budget::for_user(db, user_id)
        .await?
        .map(|b| b.monthly_budget)
        .unwrap_or_else(default_monthly_budget))
}
