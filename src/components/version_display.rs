//! Version Display
//!
//! Shows the client version next to the backend's, fetched once on mount.
//! A failed fetch degrades to a placeholder instead of a notification.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;

const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");
const UNAVAILABLE: &str = "Unavailable";

#[component]
pub fn VersionDisplay() -> impl IntoView {
    let (backend_version, set_backend_version) = signal(String::new());

    Effect::new(move |_| {
        spawn_local(async move {
            let version = api::fetch_version()
                .await
                .unwrap_or_else(|_| UNAVAILABLE.to_string());
            set_backend_version.set(version);
        });
    });

    view! {
        <div class="version-display">
            {move || format!("Version: Frontend {} / Backend {}", CLIENT_VERSION, backend_version.get())}
        </div>
    }
}
