use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, PgPool};
use time::Date;
use uuid::Uuid;

/// Derives the per-person share. Computed once at creation and stored; never
/// editable on its own afterwards.
pub fn amount_per_person(total: Decimal, split_between: i32) -> Decimal {
    total / Decimal::from(split_between)
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SplitBill {
    pub id: i64,
    pub description: String,
    pub total_amount: Decimal,
    pub split_between: i32,
    pub amount_per_person: Decimal,
    pub date: Date,
    pub friends: Json<Vec<String>>,
    pub user_id: Uuid,
}

impl SplitBill {
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<SplitBill>> {
        let rows = sqlx::query_as::<_, SplitBill>(
            r#"
            SELECT id, description, total_amount, split_between, amount_per_person,
                   date, friends, user_id
            FROM split_bills
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
        total_amount: Decimal,
        split_between: i32,
        date: Date,
        friends: &[String],
    ) -> anyhow::Result<SplitBill> {
        let per_person = amount_per_person(total_amount, split_between);
        let row = sqlx::query_as::<_, SplitBill>(
            r#"
            INSERT INTO split_bills
                (description, total_amount, split_between, amount_per_person, date, friends, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, description, total_amount, split_between, amount_per_person,
                      date, friends, user_id
            "#,
        )
        .bind(description)
        .bind(total_amount)
        .bind(split_between)
        .bind(per_person)
        .bind(date)
        .bind(Json(friends.to_vec()))
        .bind(user_id)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, user_id: Uuid, id: i64) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM split_bills WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_person_is_total_over_count() {
        assert_eq!(
            amount_per_person(Decimal::from(90), 3),
            Decimal::from(30)
        );
        assert_eq!(
            amount_per_person(Decimal::new(105, 1), 2),
            Decimal::new(525, 2)
        );
    }

    #[test]
    fn single_person_pays_everything() {
        let total = Decimal::new(1999, 2);
        assert_eq!(amount_per_person(total, 1), total);
    }

    #[test]
    fn bill_serializes_camel_case() {
        let bill = SplitBill {
            id: 1,
            description: "Dinner".into(),
            total_amount: Decimal::from(60),
            split_between: 3,
            amount_per_person: Decimal::from(20),
            date: time::macros::date!(2026 - 08 - 25),
            friends: Json(vec!["bob".into(), "carol".into()]),
            user_id: Uuid::new_v4(),
        };
        let json = serde_json::to_value(&bill).unwrap();
        assert!(json.get("totalAmount").is_some());
        assert!(json.get("splitBetween").is_some());
        assert!(json.get("amountPerPerson").is_some());
        assert_eq!(json["friends"], serde_json::json!(["bob", "carol"]));
    }
}
