use std::collections::BTreeMap;

/// Library-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Field name to the messages the backend reported for it
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Message shown when the transport fails and there is nothing better to say
pub const NETWORK_FALLBACK_MESSAGE: &str =
    "Unable to reach the server. Please check your connection and try again.";

/// Main library error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Local, pre-submission validation failure. Blocks the network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend answered with `success: false` or a non-2xx status
    #[error("Remote error ({status}): {message}")]
    Remote {
        status: u16,
        message: String,
        field_errors: FieldErrors,
    },

    /// Transport failure before a response was received
    #[error("Network error: {0}")]
    Network(String),

    /// A successful response whose body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        AppError::Remote {
            status,
            message: message.into(),
            field_errors: FieldErrors::new(),
        }
    }

    pub fn network(msg: impl Into<String>) -> Self {
        AppError::Network(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    /// Text suitable for a page banner or an inline field message.
    ///
    /// Remote errors carry the server-provided message; transport failures
    /// collapse to a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Remote { message, .. } if !message.trim().is_empty() => message.clone(),
            AppError::Remote { status, .. } => format!("Request failed with status {}", status),
            AppError::Network(_) => NETWORK_FALLBACK_MESSAGE.to_string(),
            AppError::Decode(_) => "The server sent an unexpected response.".to_string(),
            AppError::Configuration(msg) => msg.clone(),
        }
    }

    /// First server-reported message for a form field, if any
    pub fn field_error(&self, field: &str) -> Option<&str> {
        match self {
            AppError::Remote { field_errors, .. } => field_errors
                .get(field)
                .and_then(|messages| messages.first())
                .map(String::as_str),
            _ => None,
        }
    }
}
