//! Todo Endpoints
//!
//! Authenticated CRUD calls. The backend commits to 201 for create and
//! 200 for the other mutations; anything else is reported as a failure.

use gloo_net::http::Request;
use serde::Serialize;

use super::{api_url, bearer, ApiError};
use crate::models::Todo;

#[derive(Serialize)]
struct TextBody<'a> {
    text: &'a str,
}

/// Fetch the canonical list
pub async fn list_todos(token: &str) -> Result<Vec<Todo>, ApiError> {
    let resp = Request::get(&api_url("/todos"))
        .header("Authorization", &bearer(token))
        .send()
        .await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Create a todo with `completed = false`
pub async fn create_todo(token: &str, text: &str) -> Result<(), ApiError> {
    let resp = Request::post(&api_url("/todos"))
        .header("Authorization", &bearer(token))
        .json(&TextBody { text })?
        .send()
        .await?;
    match resp.status() {
        201 => Ok(()),
        status => Err(ApiError::Status(status)),
    }
}

/// Replace a todo's text
pub async fn update_todo_text(token: &str, id: &str, text: &str) -> Result<(), ApiError> {
    let resp = Request::put(&api_url(&format!("/todos/{id}")))
        .header("Authorization", &bearer(token))
        .json(&TextBody { text })?
        .send()
        .await?;
    match resp.status() {
        200 => Ok(()),
        status => Err(ApiError::Status(status)),
    }
}

/// Flip a todo's completion flag; no body
pub async fn toggle_todo(token: &str, id: &str) -> Result<(), ApiError> {
    let resp = Request::patch(&api_url(&format!("/todos/{id}")))
        .header("Authorization", &bearer(token))
        .send()
        .await?;
    match resp.status() {
        200 => Ok(()),
        status => Err(ApiError::Status(status)),
    }
}

/// Delete a todo
pub async fn delete_todo(token: &str, id: &str) -> Result<(), ApiError> {
    let resp = Request::delete(&api_url(&format!("/todos/{id}")))
        .header("Authorization", &bearer(token))
        .send()
        .await?;
    match resp.status() {
        200 => Ok(()),
        status => Err(ApiError::Status(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_body_shape() {
        let json = serde_json::to_string(&TextBody { text: "Buy milk" }).unwrap();
        assert_eq!(json, r#"{"text":"Buy milk"}"#);
    }

    #[test]
    fn test_bearer_header() {
        assert_eq!(bearer("tok-123"), "Bearer tok-123");
    }
}
