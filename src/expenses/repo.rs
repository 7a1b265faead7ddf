use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::Date;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub amount: Decimal,
    pub date: Date,
    pub category: String,
    pub user_id: Uuid,
}

impl Expense {
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Expense>> {
        let rows = sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, description, amount, date, category, user_id
            FROM expenses
            WHERE user_id = $1
            ORDER BY date DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn insert(
        db: &PgPool,
        user_id: Uuid,
        description: &str,
        amount: Decimal,
        date: Date,
        category: &str,
    ) -> anyhow::Result<Expense> {
        let row = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (description, amount, date, category, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, description, amount, date, category, user_id
            "#,
        )
        .bind(description)
        .bind(amount)
        .bind(date)
        .bind(category)
        .bind(user_id)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        id: i64,
        description: &str,
        amount: Decimal,
        date: Date,
        category: &str,
    ) -> anyhow::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE expenses
            SET description = $1, amount = $2, date = $3, category = $4
            WHERE id = $5 AND user_id = $6
            "#,
        )
        .bind(description)
        .bind(amount)
        .bind(date)
        .bind(category)
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(db: &PgPool, user_id: Uuid, id: i64) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }
}
