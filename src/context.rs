//! Application Context
//!
//! Session and notification handle injected into every view, so no
//! component reaches for ambient globals.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ToastLevel;
use crate::models::Session;
use crate::session;
use crate::store::{
    store_clear_session, store_dismiss_toast, store_push_toast, store_set_session,
    AppStateStoreFields, AppStore,
};

/// How long a toast stays on screen
const TOAST_DISMISS_MS: u32 = 4_000;

/// Handle over the app store, cheap to copy into event handlers
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Reactive read of the current session
    pub fn session(&self) -> Option<Session> {
        self.store.session().get()
    }

    /// Token for protected requests. Untracked so effects keyed on other
    /// signals do not re-run on login/logout.
    pub fn token(&self) -> Option<String> {
        self.store
            .session()
            .get_untracked()
            .map(|session| session.token)
    }

    /// Reactive read of the logged-in username
    pub fn username(&self) -> Option<String> {
        self.store.session().get().map(|session| session.username)
    }

    /// Commit a session and persist it to durable storage
    pub fn login(&self, session: Session) {
        session::save(&session);
        store_set_session(&self.store, session);
    }

    /// Drop both the in-memory session and the persisted copy
    pub fn logout(&self) {
        session::clear();
        store_clear_session(&self.store);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastLevel::Success, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(ToastLevel::Info, message.into());
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify(ToastLevel::Warning, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastLevel::Error, message.into());
    }

    pub fn dismiss_toast(&self, toast_id: u32) {
        store_dismiss_toast(&self.store, toast_id);
    }

    fn notify(&self, level: ToastLevel, message: String) {
        let id = store_push_toast(&self.store, level, message);
        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            store_dismiss_toast(&store, id);
        });
    }
}
