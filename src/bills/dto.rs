use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{bills::repo::SplitBill, error::ApiError, sanitize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPayload {
    pub description: Option<String>,
    pub total_amount: Option<Decimal>,
    pub split_between: Option<i32>,
    pub date: Option<Date>,
    pub friends: Option<Vec<String>>,
}

pub struct BillFields {
    pub description: String,
    pub total_amount: Decimal,
    pub split_between: i32,
    pub date: Option<Date>,
    pub friends: Vec<String>,
}

impl BillPayload {
    pub fn validate(self) -> Result<BillFields, ApiError> {
        let description = sanitize::clean(self.description.as_deref().unwrap_or_default());
        if description.is_empty() {
            return Err(ApiError::Validation("Description is required".into()));
        }
        let total_amount = match self.total_amount {
            Some(t) if t > Decimal::ZERO => t,
            _ => {
                return Err(ApiError::Validation(
                    "Valid total amount is required".into(),
                ))
            }
        };
        let split_between = match self.split_between {
            Some(n) if n > 0 => n,
            _ => return Err(ApiError::Validation("Valid split count is required".into())),
        };
        let friends = self
            .friends
            .unwrap_or_default()
            .into_iter()
            .map(|f| sanitize::clean(&f))
            .filter(|f| !f.is_empty())
            .collect();
        Ok(BillFields {
            description,
            total_amount,
            split_between,
            date: self.date,
            friends,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct BillList {
    pub bills: Vec<SplitBill>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(total: Option<Decimal>, split: Option<i32>) -> BillPayload {
        BillPayload {
            description: Some("Dinner".into()),
            total_amount: total,
            split_between: split,
            date: None,
            friends: None,
        }
    }

    #[test]
    fn rejects_nonpositive_total() {
        assert!(payload(None, Some(2)).validate().is_err());
        assert!(payload(Some(Decimal::ZERO), Some(2)).validate().is_err());
    }

    #[test]
    fn rejects_nonpositive_split_count() {
        assert!(payload(Some(Decimal::from(10)), None).validate().is_err());
        assert!(payload(Some(Decimal::from(10)), Some(0)).validate().is_err());
        assert!(payload(Some(Decimal::from(10)), Some(-2)).validate().is_err());
    }

    #[test]
    fn friends_default_to_empty_and_get_cleaned() {
        let fields = payload(Some(Decimal::from(10)), Some(2)).validate().unwrap();
        assert!(fields.friends.is_empty());

        let mut p = payload(Some(Decimal::from(10)), Some(2));
        p.friends = Some(vec![" bob ".into(), "<x>".into(), "".into()]);
        let fields = p.validate().unwrap();
        assert_eq!(fields.friends, vec!["bob".to_string(), "x".to_string()]);
    }
}
