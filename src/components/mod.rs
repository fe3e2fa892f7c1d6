//! UI Components
//!
//! Leptos views and the notification overlay.

mod login;
mod signup;
mod toast;
mod todo_app;
mod version_display;

pub use login::Login;
pub use signup::Signup;
pub use toast::{Toast, ToastHost, ToastLevel};
pub use todo_app::TodoApp;
pub use version_display::VersionDisplay;
