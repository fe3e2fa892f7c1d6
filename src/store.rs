//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Toast, ToastLevel};
use crate::models::Session;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current authenticated session, if any
    pub session: Option<Session>,
    /// Queued notifications, newest last
    pub toasts: Vec<Toast>,
    /// Id handed to the next queued toast
    pub next_toast_id: u32,
}

impl AppState {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            session,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the current session
pub fn store_set_session(store: &AppStore, session: Session) {
    store.session().set(Some(session));
}

/// Drop the current session
pub fn store_clear_session(store: &AppStore) {
    store.session().set(None);
}

/// Queue a toast and return its id
pub fn store_push_toast(store: &AppStore, level: ToastLevel, message: String) -> u32 {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().update(|v| *v += 1);
    store.toasts().write().push(Toast { id, level, message });
    id
}

/// Remove a toast by id; already-dismissed ids are a no-op
pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_queue() {
        let store = Store::new(AppState::new(None));

        let first = store_push_toast(&store, ToastLevel::Info, "one".to_string());
        let second = store_push_toast(&store, ToastLevel::Error, "two".to_string());
        assert_ne!(first, second);
        assert_eq!(store.toasts().read_untracked().len(), 2);

        store_dismiss_toast(&store, first);
        let toasts = store.toasts().read_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, second);
        assert_eq!(toasts[0].message, "two");
    }

    #[test]
    fn test_session_helpers() {
        let store = Store::new(AppState::new(None));
        assert!(store.session().read_untracked().is_none());

        let session = Session {
            token: "tok".to_string(),
            username: "alice".to_string(),
        };
        store_set_session(&store, session.clone());
        assert_eq!(*store.session().read_untracked(), Some(session));

        store_clear_session(&store);
        assert!(store.session().read_untracked().is_none());
    }
}
