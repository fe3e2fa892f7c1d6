//! Signup View
//!
//! Account creation form. On success the user is sent to the login page
//! rather than logged in directly.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiError};
use crate::context::AppContext;

#[component]
pub fn Signup() -> impl IntoView {
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
            match api::signup(&username_val, &password_val).await {
                Ok(()) => {
                    ctx.success("Account created. Please log in.");
                    navigate("/login", Default::default());
                }
                Err(ApiError::Rejected(message)) => ctx.error(message),
                Err(_) => ctx.error("Signup failed"),
            }
        });
    };

    view! {
        <div class="auth-container">
            <h2>"Sign Up"</h2>
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
                <button type="submit">"Sign Up"</button>
            </form>
            <p>
                "Already have an account? "
                <a href="/login">"Login here"</a>
            </p>
        </div>
    }
}
