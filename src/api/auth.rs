//! Auth Endpoints
//!
//! Login and signup calls; neither carries a token. The signup payload
//! mirrors login's, which is the backend's observed contract for both.

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

use super::{api_url, ApiError};
use crate::models::Session;

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Exchange credentials for a session
pub async fn login(username: &str, password: &str) -> Result<Session, ApiError> {
    let resp = Request::post(&api_url("/auth/login"))
        .json(&Credentials { username, password })?
        .send()
        .await?;
    if !resp.ok() {
        return Err(rejection(resp).await);
    }
    resp.json::<Session>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Create an account; the caller logs in separately afterwards
pub async fn signup(username: &str, password: &str) -> Result<(), ApiError> {
    let resp = Request::post(&api_url("/auth/signup"))
        .json(&Credentials { username, password })?
        .send()
        .await?;
    if !resp.ok() {
        return Err(rejection(resp).await);
    }
    Ok(())
}

/// Prefer the backend's own error message when the body carries one
async fn rejection(resp: Response) -> ApiError {
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(body) => ApiError::Rejected(body.error),
        Err(_) => ApiError::Status(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"Invalid credentials"}"#).unwrap();
        assert_eq!(body.error, "Invalid credentials");

        // Anything else falls through to a plain status error
        assert!(serde_json::from_str::<ErrorBody>(r#"{"message":"nope"}"#).is_err());
        assert!(serde_json::from_str::<ErrorBody>("").is_err());
    }

    #[test]
    fn test_credentials_shape() {
        let json = serde_json::to_string(&Credentials {
            username: "alice",
            password: "hunter2",
        })
        .unwrap();
        assert_eq!(json, r#"{"username":"alice","password":"hunter2"}"#);
    }
}
