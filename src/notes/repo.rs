use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: i64,
    pub content: String,
    pub user_id: Uuid,
    pub created: OffsetDateTime,
}

impl Note {
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Note>> {
        let rows = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, content, user_id, created
            FROM notes
            WHERE user_id = $1
            ORDER BY created DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn insert(db: &PgPool, user_id: Uuid, content: &str) -> anyhow::Result<Note> {
        let row = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (content, user_id)
            VALUES ($1, $2)
            RETURNING id, content, user_id, created
            "#,
        )
        .bind(content)
        .bind(user_id)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn update(db: &PgPool, user_id: Uuid, id: i64, content: &str) -> anyhow::Result<u64> {
        let result = sqlx::query("UPDATE notes SET content = $1 WHERE id = $2 AND user_id = $3")
            .bind(content)
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(db: &PgPool, user_id: Uuid, id: i64) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }
}
