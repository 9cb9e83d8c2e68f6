use reqwest::{Response, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-success status. The message is the response body, or the status line
    /// when the body is empty.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("request error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unable to decode response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Passes 2xx responses through and turns everything else into `ClientError::Status`.
pub(crate) async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = if text.is_empty() {
        status.to_string()
    } else {
        text
    };
    Err(ClientError::Status { status, message })
}
