//! Response decoding for HTTP-backed providers
//!
//! Every failure here is a [`Error::Provider`], which callers treat as
//! transient.

use frost_domain::error::{Error, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

/// Short label for a non-success status
fn status_label(status: StatusCode) -> String {
    match status {
        StatusCode::UNAUTHORIZED => "authentication failed".to_string(),
        StatusCode::TOO_MANY_REQUESTS => "rate limit exceeded".to_string(),
        s if s.is_server_error() => format!("server error ({})", s.as_u16()),
        s => format!("request failed ({})", s.as_u16()),
    }
}

/// The `error.message` field of an OpenAI-style error body, if any
fn upstream_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .pointer("/error/message")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

/// Turn a response into `T`, or into a provider error naming `provider`
pub async fn decode_json<T: DeserializeOwned>(response: Response, provider: &str) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        return response.json::<T>().await.map_err(|e| {
            Error::provider_with_source(format!("{provider} response parse failed: {e}"), e)
        });
    }

    let body = response.text().await.unwrap_or_default();
    let details = upstream_message(&body).unwrap_or(body);
    Err(Error::provider(format!(
        "{provider} {}: {details}",
        status_label(status)
    )))
}
