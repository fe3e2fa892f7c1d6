//! Toast Notifications
//!
//! Transient overlay messages queued through the AppContext. Each toast
//! auto-dismisses after a few seconds; clicking one dismisses it early.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Severity of a queued notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Info => "toast toast-info",
            ToastLevel::Warning => "toast toast-warning",
            ToastLevel::Error => "toast toast-error",
        }
    }
}

/// One queued notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// Overlay rendering the toast queue, newest at the bottom
#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_app_store();
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="toast-host">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.level.class() on:click=move |_| ctx.dismiss_toast(id)>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
