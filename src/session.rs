//! Session Persistence
//!
//! One localStorage key holds the serialized session. An absent key,
//! inaccessible storage, or malformed JSON all mean "no session".

use crate::models::Session;

const SESSION_KEY: &str = "todo.web.session.v1";

/// Restore a previously persisted session; never fails
pub fn load() -> Option<Session> {
    let raw = storage()?.get_item(SESSION_KEY).ok()??;
    parse(&raw)
}

/// Persist the session; best effort, errors are swallowed
pub fn save(session: &Session) {
    let Some(storage) = storage() else { return };
    if let Ok(serialized) = serde_json::to_string(session) {
        let _ = storage.set_item(SESSION_KEY, &serialized);
    }
}

/// Remove the persisted session
pub fn clear() {
    let Some(storage) = storage() else { return };
    let _ = storage.remove_item(SESSION_KEY);
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn parse(raw: &str) -> Option<Session> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        let session = Session {
            token: "tok-456".to_string(),
            username: "bob".to_string(),
        };
        let raw = serde_json::to_string(&session).unwrap();
        assert_eq!(parse(&raw), Some(session));
    }

    #[test]
    fn test_parse_malformed_is_none() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("not json"), None);
        assert_eq!(parse("{\"token\":\"t\"}"), None);
        assert_eq!(parse("[1,2,3]"), None);
    }
}
