use crate::types::FieldError;

/// Notice shown when a list fetch fails without a server message.
pub const FETCH_FAILED: &str = "Failed to fetch data.";

/// Errors from the movies HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a usable response (network, DNS, TLS, body decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        /// The envelope's `error` field, or the raw body when it is not an envelope.
        message: String,
        errors: Vec<FieldError>,
    },
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            ClientError::Api { status, .. } => Some(*status),
        }
    }

    /// Message for a transient notice: the server's own message when it sent
    /// one, `fallback` for transport failures.
    pub fn notice_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
