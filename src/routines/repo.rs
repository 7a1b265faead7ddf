use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Routine {
    pub id: i64,
    pub task: String,
    pub completed: bool,
    pub time: Option<String>,
    pub user_id: Uuid,
    pub created: OffsetDateTime,
}

impl Routine {
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Routine>> {
        let rows = sqlx::query_as::<_, Routine>(
            r#"
            SELECT id, task, completed, time, user_id, created
            FROM routines
            WHERE user_id = $1
            ORDER BY created DESC
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
        task: &str,
        time: Option<&str>,
    ) -> anyhow::Result<Routine> {
        let row = sqlx::query_as::<_, Routine>(
            r#"
            INSERT INTO routines (task, completed, time, user_id)
            VALUES ($1, FALSE, $2, $3)
            RETURNING id, task, completed, time, user_id, created
            "#,
        )
        .bind(task)
        .bind(time)
        .bind(user_id)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        id: i64,
        task: &str,
        completed: bool,
        time: Option<&str>,
    ) -> anyhow::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE routines
            SET task = $1, completed = $2, time = $3
            WHERE id = $4 AND user_id = $5
            "#,
        )
        .bind(task)
        .bind(completed)
        .bind(time)
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(db: &PgPool, user_id: Uuid, id: i64) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM routines WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }
}
