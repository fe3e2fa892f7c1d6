//! Login View
//!
//! Credential form; commits the session and navigates home on success.
//! Inputs keep their values on failure so the user can retry.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiError};
use crate::context::AppContext;

#[component]
pub fn Login() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username_val = username.get();
        let password_val = password.get();
        let navigate = navigate.clone();

        spawn_local(async move {
            match api::login(&username_val, &password_val).await {
                Ok(session) => {
                    ctx.login(session);
                    ctx.success("Logged in successfully!");
                    navigate("/", Default::default());
                }
                Err(ApiError::Rejected(message)) => ctx.error(message),
                Err(_) => ctx.error("Login failed"),
            }
        });
    };

    view! {
        <div class="auth-container">
            <h2>"Login"</h2>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_username.set(input.value());
                    }
                    required=true
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_password.set(input.value());
                    }
                    required=true
                />
                <button type="submit">"Login"</button>
            </form>
            <p>
                "Don't have an account? "
                <a href="/signup">"Sign up here"</a>
            </p>
        </div>
    }
}
