use serde::{Deserialize, Serialize};

use crate::{error::ApiError, sanitize, todos::repo::Todo};

#[derive(Debug, Deserialize)]
pub struct TodoPayload {
    pub task: Option<String>,
    pub completed: Option<bool>,
}

pub struct TodoFields {
    pub task: String,
    pub completed: bool,
}

impl TodoPayload {
    pub fn validate(self) -> Result<TodoFields, ApiError> {
        let task = sanitize::clean(self.task.as_deref().unwrap_or_default());
        if task.is_empty() {
            return Err(ApiError::Validation("Task is required".into()));
        }
        Ok(TodoFields {
            task,
            completed: self.completed.unwrap_or(false),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_task() {
        assert!(TodoPayload {
            task: Some("".into()),
            completed: None
        }
        .validate()
        .is_err());
    }

    #[test]
    fn keeps_completed_flag() {
        let fields = TodoPayload {
            task: Some("Buy milk".into()),
            completed: Some(true),
        }
        .validate()
        .unwrap();
        assert!(fields.completed);
        assert_eq!(fields.task, "Buy milk");
    }
}
