use serde::{Deserialize, Serialize};

use crate::{error::ApiError, routines::repo::Routine, sanitize};

#[derive(Debug, Deserialize)]
pub struct RoutinePayload {
    pub task: Option<String>,
    pub completed: Option<bool>,
    pub time: Option<String>,
}

pub struct RoutineFields {
    pub task: String,
    pub completed: bool,
    pub time: Option<String>,
}

impl RoutinePayload {
    pub fn validate(self) -> Result<RoutineFields, ApiError> {
        let task = sanitize::clean(self.task.as_deref().unwrap_or_default());
        if task.is_empty() {
            return Err(ApiError::Validation("Task is required".into()));
        }
        Ok(RoutineFields {
            task,
            completed: self.completed.unwrap_or(false),
            time: sanitize::clean_opt(self.time),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RoutineList {
    pub routines: Vec<Routine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_or_blank_task() {
        let p = RoutinePayload {
            task: None,
            completed: None,
            time: None,
        };
        assert!(p.validate().is_err());

        let p = RoutinePayload {
            task: Some("   ".into()),
            completed: None,
            time: None,
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn completed_defaults_to_false() {
        let fields = RoutinePayload {
            task: Some("Stretch".into()),
            completed: None,
            time: Some(" 07:00 ".into()),
        }
        .validate()
        .unwrap();
        assert!(!fields.completed);
        assert_eq!(fields.time.as_deref(), Some("07:00"));
    }
}
