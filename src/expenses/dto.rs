use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{error::ApiError, expenses::repo::Expense, sanitize};

/// Full-replace payload for creating or updating an expense.
#[derive(Debug, Deserialize)]
pub struct ExpensePayload {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<Date>,
    pub category: Option<String>,
}

/// Cleaned and validated expense fields.
#[derive(Debug)]
pub struct ExpenseFields {
    pub description: String,
    pub amount: Decimal,
    pub date: Option<Date>,
    pub category: String,
}

impl ExpensePayload {
    pub fn validate(self) -> Result<ExpenseFields, ApiError> {
        let description = sanitize::clean(self.description.as_deref().unwrap_or_default());
        if description.is_empty() {
            return Err(ApiError::Validation("Description is required".into()));
        }
        let amount = match self.amount {
            Some(a) if a > Decimal::ZERO => a,
            _ => return Err(ApiError::Validation("Valid amount is required".into())),
        };
        let category =
            sanitize::clean_opt(self.category).unwrap_or_else(|| "General".to_string());
        Ok(ExpenseFields {
            description,
            amount,
            date: self.date,
            category,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ExpenseList {
    pub expenses: Vec<Expense>,
    #[serde(rename = "currentSpent")]
    pub current_spent: Decimal,
    #[serde(rename = "monthlyBudget")]
    pub monthly_budget: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(description: Option<&str>, amount: Option<Decimal>) -> ExpensePayload {
        ExpensePayload {
            description: description.map(String::from),
            amount,
            date: None,
            category: None,
        }
    }

    #[test]
    fn rejects_missing_description() {
        let err = payload(None, Some(Decimal::from(5))).validate().unwrap_err();
        assert_eq!(err.to_string(), "Description is required");
    }

    #[test]
    fn rejects_blank_description() {
        assert!(payload(Some("   "), Some(Decimal::from(5)))
            .validate()
            .is_err());
    }

    #[test]
    fn rejects_missing_or_nonpositive_amount() {
        assert!(payload(Some("Coffee"), None).validate().is_err());
        assert!(payload(Some("Coffee"), Some(Decimal::ZERO)).validate().is_err());
        assert!(payload(Some("Coffee"), Some(Decimal::from(-3)))
            .validate()
            .is_err());
    }

    #[test]
    fn defaults_category_to_general() {
        let fields = payload(Some("Coffee"), Some(Decimal::new(35, 1)))
            .validate()
            .unwrap();
        assert_eq!(fields.category, "General");
        assert_eq!(fields.amount, Decimal::new(35, 1));
    }

    #[test]
    fn sanitizes_description() {
        let mut p = payload(Some("  <b>Coffee</b>  "), Some(Decimal::from(3)));
        p.category = Some(" Food ".into());
        let fields = p.validate().unwrap();
        assert_eq!(fields.description, "bCoffee/b");
        assert_eq!(fields.category, "Food");
    }
}
