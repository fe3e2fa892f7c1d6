//! Todo List View
//!
//! Fetches the canonical list from the backend and re-fetches after every
//! mutation; the displayed list is never client-predicted. At most one row
//! is in edit mode, and switching rows discards the previous draft.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};

use crate::api::{self, ApiError};
use crate::components::VersionDisplay;
use crate::context::AppContext;
use crate::models::{normalized_text, Filter, Todo};

#[component]
pub fn TodoApp() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (todos, set_todos) = signal(Vec::<Todo>::new());
    let (input, set_input) = signal(String::new());
    let (edit_id, set_edit_id) = signal::<Option<String>>(None);
    let (edit_text, set_edit_text) = signal(String::new());
    let (filter, set_filter) = signal(Filter::All);
    let (loading, set_loading) = signal(false);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let reload = move || set_reload_trigger.update(|v| *v += 1);

    // Load todos on mount and after every successful mutation. A failed
    // fetch leaves whatever was displayed before untouched.
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let Some(token) = ctx.token() else { return };
        web_sys::console::log_1(&format!("[TODO] Fetching list, trigger={}", trigger).into());
        set_loading.set(true);
        spawn_local(async move {
            match api::list_todos(&token).await {
                Ok(loaded) => set_todos.set(loaded),
                Err(_) => ctx.error("Could not fetch todos. Please try again."),
            }
            set_loading.set(false);
        });
    });

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(text) = normalized_text(&input.get()) else {
            ctx.warning("Todo cannot be empty.");
            return;
        };
        let Some(token) = ctx.token() else { return };
        spawn_local(async move {
            match api::create_todo(&token, &text).await {
                Ok(()) => {
                    set_input.set(String::new());
                    reload();
                    ctx.info("Todo added successfully.");
                }
                Err(ApiError::Status(_)) => ctx.error("Could not add todo. Please try again."),
                Err(_) => ctx.error("Error adding todo. Please check your connection."),
            }
        });
    };

    // Entering edit on a new row silently replaces any in-progress draft
    let start_edit = move |id: String, text: String| {
        set_edit_id.set(Some(id));
        set_edit_text.set(text);
    };

    let cancel_edit = move || {
        set_edit_id.set(None);
        set_edit_text.set(String::new());
    };

    let submit_edit = move |id: String| {
        let Some(text) = normalized_text(&edit_text.get()) else {
            ctx.warning("Todo cannot be empty.");
            return;
        };
        let Some(token) = ctx.token() else { return };
        spawn_local(async move {
            match api::update_todo_text(&token, &id, &text).await {
                Ok(()) => {
                    set_edit_id.set(None);
                    set_edit_text.set(String::new());
                    reload();
                    ctx.info("Todo updated successfully.");
                }
                Err(ApiError::Status(_)) => ctx.error("Could not update todo. Please try again."),
                Err(_) => ctx.error("Error updating todo. Please check your connection."),
            }
        });
    };

    let toggle_todo = move |id: String| {
        let Some(token) = ctx.token() else { return };
        spawn_local(async move {
            match api::toggle_todo(&token, &id).await {
                Ok(()) => {
                    reload();
                    ctx.info("Todo marked as completed.");
                }
                Err(ApiError::Status(_)) => {
                    ctx.error("Could not toggle todo status. Please try again.")
                }
                Err(_) => ctx.error("Error toggling todo. Please check your connection."),
            }
        });
    };

    let delete_todo = move |id: String| {
        let Some(token) = ctx.token() else { return };
        spawn_local(async move {
            match api::delete_todo(&token, &id).await {
                Ok(()) => {
                    reload();
                    ctx.info("Todo deleted successfully.");
                }
                Err(ApiError::Status(_)) => ctx.error("Could not delete todo. Please try again."),
                Err(_) => ctx.error("Error deleting todo. Please check your connection."),
            }
        });
    };

    view! {
        <div class="container">
            <div class="todo-header">
                <h1>"Todo"</h1>
                <div>
                    "Logged in as " <strong>{move || ctx.username().unwrap_or_default()}</strong>
                    <button class="logout-btn" on:click=move |_| ctx.logout()>
                        "Logout"
                    </button>
                </div>
            </div>

            <form class="add-form" on:submit=add_todo>
                <input
                    type="text"
                    placeholder="Enter a todo..."
                    prop:value=move || input.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_input.set(input.value());
                    }
                />
                <button type="submit">"Add"</button>
            </form>

            <Show when=move || loading.get()>
                <p class="loading">"Loading..."</p>
            </Show>

            <div class="filter-bar">
                {Filter::ALL
                    .iter()
                    .map(|f| {
                        let f = *f;
                        view! {
                            <button
                                class="filter-btn"
                                disabled=move || filter.get() == f
                                on:click=move |_| set_filter.set(f)
                            >
                                {f.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <ul class="todo-list">
                {move || {
                    let current_filter = filter.get();
                    let editing = edit_id.get();
                    todos
                        .get()
                        .into_iter()
                        .filter(|todo| current_filter.matches(todo))
                        .map(|todo| {
                            let is_editing = editing.as_deref() == Some(todo.id.as_str());
                            if is_editing {
                                editing_row(todo, edit_text, set_edit_text, submit_edit, cancel_edit)
                            } else {
                                viewing_row(todo, toggle_todo, start_edit, delete_todo)
                            }
                        })
                        .collect_view()
                }}
            </ul>

            <VersionDisplay />
        </div>
    }
}

/// Row with the edit draft open; Enter saves, Escape cancels
fn editing_row(
    todo: Todo,
    edit_text: ReadSignal<String>,
    set_edit_text: WriteSignal<String>,
    submit_edit: impl Fn(String) + Copy + 'static,
    cancel_edit: impl Fn() + Copy + 'static,
) -> AnyView {
    let key_id = todo.id.clone();
    let save_id = todo.id;

    view! {
        <li class="editing">
            <input
                type="text"
                prop:value=move || edit_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_edit_text.set(input.value());
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    match ev.key().as_str() {
                        "Enter" => submit_edit(key_id.clone()),
                        "Escape" => cancel_edit(),
                        _ => {}
                    }
                }
            />
            <button on:click=move |_| submit_edit(save_id.clone())>"Save"</button>
            <button on:click=move |_| cancel_edit()>"Cancel"</button>
        </li>
    }
    .into_any()
}

/// Read-only row; clicking the text toggles completion
fn viewing_row(
    todo: Todo,
    toggle_todo: impl Fn(String) + Copy + 'static,
    start_edit: impl Fn(String, String) + Copy + 'static,
    delete_todo: impl Fn(String) + Copy + 'static,
) -> AnyView {
    let toggle_id = todo.id.clone();
    let edit_target = todo.id.clone();
    let edit_source = todo.text.clone();
    let delete_id = todo.id.clone();

    view! {
        <li class=if todo.completed { "completed" } else { "" }>
            <span class="todo-text" on:click=move |_| toggle_todo(toggle_id.clone())>
                {todo.text.clone()}
            </span>
            {todo.created_at.as_deref().map(|raw| {
                view! { <span class="todo-created">{format!("Created: {}", format_created_at(raw))}</span> }
            })}
            <button on:click=move |_| start_edit(edit_target.clone(), edit_source.clone())>
                "Edit"
            </button>
            <button on:click=move |_| delete_todo(delete_id.clone())>"Delete"</button>
        </li>
    }
    .into_any()
}

/// Render the server timestamp in the user's locale
fn format_created_at(raw: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(raw));
    String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
}
