//! Status handling for API responses.

use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

/// Standard Google API error envelope.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Pass successful responses through, turn the rest into [`ClientError::Status`].
pub(super) async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), body = %text, "Catalog returned an error");

    Err(ClientError::status(status.as_u16(), error_message(&text)))
}

/// The API's own message when the body is an error envelope, else the body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ => body.trim().to_string(),
    }
}
