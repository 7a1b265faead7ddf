use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i64,
    pub task: String,
    pub completed: bool,
    pub user_id: Uuid,
    pub created: OffsetDateTime,
}

impl Todo {
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Todo>> {
        let rows = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, task, completed, user_id, created
            FROM todos
            WHERE user_id = $1
            ORDER BY created DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn insert(db: &PgPool, user_id: Uuid, task: &str) -> anyhow::Result<Todo> {
        let row = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (task, completed, user_id)
            VALUES ($1, FALSE, $2)
            RETURNING id, task, completed, user_id, created
            "#,
        )
        .bind(task)
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
    ) -> anyhow::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET task = $1, completed = $2
            WHERE id = $3 AND user_id = $4
            "#,
        )
        .bind(task)
        .bind(completed)
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(db: &PgPool, user_id: Uuid, id: i64) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }
}
