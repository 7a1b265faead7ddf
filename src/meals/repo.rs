use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// One cell of the weekly plan: a (day, meal type) slot and its text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MealEntry {
    pub day: String,
    pub meal_type: String,
    pub meal: String,
}

pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<MealEntry>> {
    let rows = sqlx::query_as::<_, MealEntry>(
        r#"
        SELECT day, meal_type, meal
        FROM meals
        WHERE user_id = $1
        ORDER BY day ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// One row per (owner, day, meal type); insert or replace the text.
pub async fn upsert(
    db: &PgPool,
    user_id: Uuid,
    day: &str,
    meal_type: &str,
    meal: &str,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO meals (day, meal_type, meal, user_id)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id, day, meal_type) DO UPDATE SET meal = EXCLUDED.meal
        "#,
    )
    .bind(day)
    .bind(meal_type)
    .bind(meal)
    .bind(user_id)
    .execute(db)
    .await?;
    Ok(())
}
