//! Version Endpoint
//!
//! Unauthenticated backend version probe.

use gloo_net::http::Request;
use serde::Deserialize;

use super::{api_url, ApiError};

#[derive(Deserialize)]
struct VersionBody {
    version: String,
}

/// Backend version string
pub async fn fetch_version() -> Result<String, ApiError> {
    let resp = Request::get(&api_url("/api/version")).send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let body: VersionBody = resp
        .json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    Ok(body.version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_body_shape() {
        let body: VersionBody = serde_json::from_str(r#"{"version":"1.4.2"}"#).unwrap();
        assert_eq!(body.version, "1.4.2");
    }
}
