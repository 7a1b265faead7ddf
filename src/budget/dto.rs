use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct BudgetPayload {
    #[serde(rename = "monthlyBudget")]
    pub monthly_budget: Option<Decimal>,
}

impl BudgetPayload {
    pub fn validate(self) -> Result<Decimal, ApiError> {
        match self.monthly_budget {
            Some(b) if b > Decimal::ZERO => Ok(b),
            _ => Err(ApiError::Validation(
                "Valid monthly budget is required".into(),
            )),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BudgetResponse {
    #[serde(rename = "monthlyBudget")]
    pub monthly_budget: Decimal,
}

#[derive(Debug, Serialize)]
pub struct BudgetUpdated {
    pub success: bool,
    pub message: String,
    #[serde(rename = "monthlyBudget")]
    pub monthly_budget: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_and_nonpositive_budget() {
        assert!(BudgetPayload {
            monthly_budget: None
        }
        .validate()
        .is_err());
        assert!(BudgetPayload {
            monthly_budget: Some(Decimal::ZERO)
        }
        .validate()
        .is_err());
        assert!(BudgetPayload {
            monthly_budget: Some(Decimal::from(-10))
        }
        .validate()
        .is_err());
    }

    #[test]
    fn accepts_positive_budget_without_upper_bound() {
        assert_eq!(
            BudgetPayload {
                monthly_budget: Some(Decimal::from(1_000_000))
            }
            .validate()
            .unwrap(),
            Decimal::from(1_000_000)
        );
    }
}
