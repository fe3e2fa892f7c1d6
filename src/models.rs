//! Frontend Models
//!
//! Data structures matching the backend's wire format, plus the purely
//! local filter state.

use serde::{Deserialize, Serialize};

/// Authenticated identity held on the client and attached to protected requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
}

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// Server-assigned creation timestamp; older records may lack it
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Which fetched todos the list view displays; never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl Filter {
    /// Display order for the filter bar
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Completed, Filter::Incomplete];

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => todo.completed,
            Filter::Incomplete => !todo.completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Completed => "Completed",
            Filter::Incomplete => "Incomplete",
        }
    }
}

/// Trim todo text for add/edit; whitespace-only input is rejected before
/// any request is sent
pub fn normalized_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: &str, completed: bool) -> Todo {
        Todo {
            id: id.to_string(),
            text: format!("Todo {}", id),
            completed,
            created_at: None,
        }
    }

    #[test]
    fn test_normalized_text() {
        assert_eq!(normalized_text(""), None);
        assert_eq!(normalized_text("   "), None);
        assert_eq!(normalized_text("\t\n"), None);
        assert_eq!(normalized_text("Buy milk"), Some("Buy milk".to_string()));
        assert_eq!(normalized_text("  Buy milk  "), Some("Buy milk".to_string()));
    }

    #[test]
    fn test_filter_matches() {
        let todos = vec![
            make_todo("1", true),
            make_todo("2", false),
            make_todo("3", false),
        ];

        let count = |filter: Filter| todos.iter().filter(|t| filter.matches(t)).count();

        assert_eq!(count(Filter::All), 3);
        assert_eq!(count(Filter::Completed), 1);
        assert_eq!(count(Filter::Incomplete), 2);
    }

    #[test]
    fn test_todo_wire_shape() {
        let json = r#"{"_id":"abc123","text":"Buy milk","completed":false,"createdAt":"2024-01-02T03:04:05.000Z"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id, "abc123");
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
        assert_eq!(todo.created_at.as_deref(), Some("2024-01-02T03:04:05.000Z"));
    }

    #[test]
    fn test_todo_without_created_at() {
        let json = r#"{"_id":"abc123","text":"Buy milk","completed":true}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.created_at, None);
    }

    #[test]
    fn test_session_round_trip() {
        let session = Session {
            token: "tok-123".to_string(),
            username: "alice".to_string(),
        };
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }
}
