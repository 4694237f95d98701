use serde::{Deserialize, Serialize};

/// A single to-do entry as stored and rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRecord {
    pub text: String,
    #[serde(default, alias = "isCompleted")]
    pub completed: bool,
    #[serde(default)]
    pub is_editing: bool,
}

impl TodoRecord {
    /// Create a fresh record (not completed, not editing)
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
            is_editing: false,
        }
    }

    /// Case-insensitive comparison used for duplicate detection
    pub fn matches(&self, text: &str) -> bool {
        same_text(&self.text, text)
    }
}

/// Two texts are equal after lowercasing
pub fn same_text(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_record_defaults() {
        let record = TodoRecord::new("Buy milk");
        assert_eq!(record.text, "Buy milk");
        assert!(!record.completed);
        assert!(!record.is_editing);
    }

    #[test]
    fn test_matches_ignores_case() {
        let record = TodoRecord::new("Buy milk");
        assert!(record.matches("buy MILK"));
        assert!(!record.matches("buy milk "));
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_string(&TodoRecord::new("A")).unwrap();
        assert_eq!(json, r#"{"text":"A","completed":false,"isEditing":false}"#);
    }

    #[test]
    fn test_deserialize_legacy_completed_field() {
        let record: TodoRecord =
            serde_json::from_str(r#"{"text":"A","isCompleted":true}"#).unwrap();
        assert!(record.completed);
        assert!(!record.is_editing);
    }
}
