use serde::Deserialize;
use serde_json::Value;

use crate::core::{AppError, FieldErrors, Result};

/// Payload of a successful `{ success: true, message, data }` response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub message: String,
    pub data: Value,
}

impl ApiReply {
    pub fn new(message: impl Into<String>, data: Value) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    errors: Option<FieldErrors>,
}

/// Error bodies are read leniently; any of these keys may be missing
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<FieldErrors>,
}

/// Turns a raw status and body into a reply or a [`AppError::Remote`]
pub fn interpret_response(status: u16, body: &[u8]) -> Result<ApiReply> {
    if !(200..300).contains(&status) {
        let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
        return Err(AppError::Remote {
            status,
            message: parsed.message.unwrap_or_default(),
            field_errors: parsed.errors.unwrap_or_default(),
        });
    }

    let envelope: Envelope = serde_json::from_slice(body)?;
    let message = envelope.message.unwrap_or_default();

    if !envelope.success {
        return Err(AppError::Remote {
            status,
            message,
            field_errors: envelope.errors.unwrap_or_default(),
        });
    }

    Ok(ApiReply {
        message,
        data: envelope.data,
    })
}
