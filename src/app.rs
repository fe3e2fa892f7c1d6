//! Application Shell
//!
//! Session-aware router: unauthenticated users land on /login, and
//! authenticated users are kept away from the auth pages.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{Login, Signup, ToastHost, TodoApp};
use crate::context::AppContext;
use crate::session;
use crate::store::{AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // Restore any persisted session before the first route resolves
    let store: AppStore = Store::new(AppState::new(session::load()));
    provide_context(store);

    let ctx = AppContext::new(store);
    provide_context(ctx);

    let logged_in = move || ctx.session().is_some();

    view! {
        <ToastHost />
        <Router>
            <Routes fallback=|| view! { <Redirect path="/" /> }>
                <Route
                    path=path!("/")
                    view=move || {
                        move || {
                            if logged_in() {
                                view! { <TodoApp /> }.into_any()
                            } else {
                                view! { <Redirect path="/login" /> }.into_any()
                            }
                        }
                    }
                />
                <Route
                    path=path!("/login")
                    view=move || {
                        move || {
                            if logged_in() {
                                view! { <Redirect path="/" /> }.into_any()
                            } else {
                                view! { <Login /> }.into_any()
                            }
                        }
                    }
                />
                <Route
                    path=path!("/signup")
                    view=move || {
                        move || {
                            if logged_in() {
                                view! { <Redirect path="/" /> }.into_any()
                            } else {
                                view! { <Signup /> }.into_any()
                            }
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
