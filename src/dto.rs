use serde::Serialize;

/// Generic `{success, message}` envelope returned by mutating endpoints.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

impl StatusResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_success_and_message() {
        let json = serde_json::to_string(&StatusResponse::ok("Login successful")).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("Login successful"));
    }
}
