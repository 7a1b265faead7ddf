use serde::{Deserialize, Serialize};

use crate::{error::ApiError, notes::repo::Note, sanitize};

#[derive(Debug, Deserialize)]
pub struct NotePayload {
    pub content: Option<String>,
}

impl NotePayload {
    pub fn validate(self) -> Result<String, ApiError> {
        let content = sanitize::clean(self.content.as_deref().unwrap_or_default());
        if content.is_empty() {
            return Err(ApiError::Validation("Note content is required".into()));
        }
        Ok(content)
    }
}

#[derive(Debug, Serialize)]
pub struct NoteList {
    pub notes: Vec<Note>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_content() {
        assert!(NotePayload { content: None }.validate().is_err());
        assert!(NotePayload {
            content: Some("  ".into())
        }
        .validate()
        .is_err());
    }

    #[test]
    fn cleans_content() {
        let content = NotePayload {
            content: Some(" remember <this> ".into()),
        }
        .validate()
        .unwrap();
        assert_eq!(content, "remember this");
    }
}
