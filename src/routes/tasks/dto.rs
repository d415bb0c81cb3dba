use serde::{Deserialize, Serialize};

pub const DEFAULT_STATUS: &str = "pending";

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// Body of both create and update. Update is a full overwrite, so every
/// field goes through the same defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskPayload {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    pub due_date: String,
    pub user_id: i64,
}

impl TaskPayload {
    // Shape and types are enforced by serde; this covers what serde can't.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.is_empty() {
            return Err("title must not be empty".to_string());
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct TaskCreated {
    pub message: &'static str,
    pub task_id: i64,
}

#[derive(Debug, Serialize)]
pub struct TaskMessage {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<TaskPayload, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_status_defaults_to_pending() {
        let payload = parse(json!({
            "title": "Write report",
            "due_date": "2024-01-01",
            "user_id": 7
        }))
        .unwrap();

        assert_eq!(payload.status, "pending");
        assert_eq!(payload.description, None);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_null_description_is_none() {
        let payload = parse(json!({
            "title": "Write report",
            "description": null,
            "due_date": "2024-01-01",
            "user_id": 7
        }))
        .unwrap();

        assert_eq!(payload.description, None);
    }

    #[test]
    fn test_missing_required_fields_rejected() {
        assert!(parse(json!({ "due_date": "2024-01-01", "user_id": 7 })).is_err());
        assert!(parse(json!({ "title": "t", "user_id": 7 })).is_err());
        assert!(parse(json!({ "title": "t", "due_date": "2024-01-01" })).is_err());
    }

    #[test]
    fn test_wrong_types_rejected() {
        assert!(parse(json!({
            "title": "t",
            "due_date": "2024-01-01",
            "user_id": "seven"
        }))
        .is_err());
        assert!(parse(json!({ "title": 5, "due_date": "2024-01-01", "user_id": 7 })).is_err());
        assert!(parse(json!({
            "title": "t",
            "status": null,
            "due_date": "2024-01-01",
            "user_id": 7
        }))
        .is_err());
    }

    #[test]
    fn test_empty_title_fails_validation() {
        let payload =
            parse(json!({ "title": "", "due_date": "2024-01-01", "user_id": 7 })).unwrap();
        assert_eq!(payload.validate(), Err("title must not be empty".to_string()));
    }

    #[test]
    fn test_whitespace_title_passes_validation() {
        let payload =
            parse(json!({ "title": "   ", "due_date": "2024-01-01", "user_id": 7 })).unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_due_date_is_not_parsed() {
        let payload =
            parse(json!({ "title": "t", "due_date": "next friday", "user_id": 7 })).unwrap();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.due_date, "next friday");
    }
}
