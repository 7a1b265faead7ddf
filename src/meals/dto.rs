use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{error::ApiError, meals::repo::MealEntry, sanitize};

/// Nested view of the plan: day -> meal type -> text.
pub type WeeklyMeals = BTreeMap<String, BTreeMap<String, String>>;

#[derive(Debug, Serialize)]
pub struct MealPlanResponse {
    #[serde(rename = "weeklyMeals")]
    pub weekly_meals: WeeklyMeals,
}

/// Update payload: an explicit list of cell upserts. Every entry in the list
/// is applied; a multi-cell payload is not silently truncated to its first
/// entry.
#[derive(Debug, Deserialize)]
pub struct MealPlanUpdate {
    #[serde(default)]
    pub meals: Vec<MealCellPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealCellPayload {
    pub day: Option<String>,
    pub meal_type: Option<String>,
    pub meal: Option<String>,
}

pub struct MealCell {
    pub day: String,
    pub meal_type: String,
    pub meal: String,
}

impl MealPlanUpdate {
    pub fn validate(self) -> Result<Vec<MealCell>, ApiError> {
        if self.meals.is_empty() {
            return Err(ApiError::Validation(
                "At least one meal entry is required".into(),
            ));
        }
        self.meals
            .into_iter()
            .map(|cell| {
                let day = sanitize::clean(cell.day.as_deref().unwrap_or_default());
                let meal_type = sanitize::clean(cell.meal_type.as_deref().unwrap_or_default());
                let meal = sanitize::clean(cell.meal.as_deref().unwrap_or_default());
                if day.is_empty() || meal_type.is_empty() || meal.is_empty() {
                    return Err(ApiError::Validation(
                        "Day, meal type, and meal are required".into(),
                    ));
                }
                Ok(MealCell {
                    day,
                    meal_type,
                    meal,
                })
            })
            .collect()
    }
}

/// Groups flat rows into the nested day -> type -> text structure. When rows
/// repeat a (day, type) pair the later row wins.
pub fn group_weekly(rows: Vec<MealEntry>) -> WeeklyMeals {
    let mut weekly = WeeklyMeals::new();
    for row in rows {
        weekly
            .entry(row.day)
            .or_default()
            .insert(row.meal_type, row.meal);
    }
    weekly
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: &str, meal_type: &str, meal: &str) -> MealEntry {
        MealEntry {
            day: day.into(),
            meal_type: meal_type.into(),
            meal: meal.into(),
        }
    }

    #[test]
    fn groups_rows_by_day_then_type() {
        let weekly = group_weekly(vec![
            entry("monday", "breakfast", "oats"),
            entry("monday", "dinner", "curry"),
            entry("tuesday", "lunch", "soup"),
        ]);
        assert_eq!(weekly["monday"]["breakfast"], "oats");
        assert_eq!(weekly["monday"]["dinner"], "curry");
        assert_eq!(weekly["tuesday"]["lunch"], "soup");
        assert_eq!(weekly.len(), 2);
    }

    #[test]
    fn later_duplicate_cell_wins() {
        let weekly = group_weekly(vec![
            entry("monday", "breakfast", "oats"),
            entry("monday", "breakfast", "eggs"),
        ]);
        assert_eq!(weekly["monday"]["breakfast"], "eggs");
    }

    #[test]
    fn empty_update_is_rejected() {
        assert!(MealPlanUpdate { meals: vec![] }.validate().is_err());
    }

    #[test]
    fn blank_cell_fields_are_rejected() {
        let update = MealPlanUpdate {
            meals: vec![MealCellPayload {
                day: Some("monday".into()),
                meal_type: None,
                meal: Some("oats".into()),
            }],
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn all_cells_survive_validation() {
        let update = MealPlanUpdate {
            meals: vec![
                MealCellPayload {
                    day: Some(" monday ".into()),
                    meal_type: Some("breakfast".into()),
                    meal: Some("oats".into()),
                },
                MealCellPayload {
                    day: Some("tuesday".into()),
                    meal_type: Some("lunch".into()),
                    meal: Some("soup".into()),
                },
            ],
        };
        let cells = update.validate().unwrap();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].day, "monday");
        assert_eq!(cells[1].meal, "soup");
    }
}
