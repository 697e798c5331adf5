//! Error types for slotctl

use serde_json::Value;
use thiserror::Error;

/// Result type alias for slotctl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown when a request was sent but no response came back
pub const NO_RESPONSE_MESSAGE: &str =
    "No response received from server. Please check your connection.";

/// Fallback text when neither the server nor the error has anything to say
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("Server returned HTTP {status}")]
    Status { status: u16, body: Option<Value> },

    /// The request went out but no response arrived (connect, timeout, reset).
    #[error("No response from server: {0}")]
    NoResponse(String),

    /// The request could not be built.
    #[error("Failed to build request: {0}")]
    Request(String),

    /// The response did not match the expected schema.
    #[error("Invalid API response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of a server rejection, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The `message` field of the server's error body, when it has a usable one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { body: Some(body), .. } => body
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.trim().is_empty()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::Request(err.to_string())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_timeout() {
            ApiError::NoResponse("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::NoResponse("Failed to connect to API".to_string())
        } else {
            ApiError::NoResponse(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Session store errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Not logged in. Run `slotctl login` first.")]
    NotLoggedIn,

    #[error("Refusing to store an empty session token")]
    EmptyToken,

    #[error("Failed to read session storage: {0}")]
    Read(String),

    #[error("Failed to write session storage: {0}")]
    Write(String),
}

/// Turn any failure into the single line shown to the user.
///
/// Server rejections render as `Error <status>: <message>`, transport
/// failures as [`NO_RESPONSE_MESSAGE`], and everything else as its own
/// message. Never panics.
pub fn describe_error(err: &(dyn std::error::Error + 'static)) -> String {
    let api = err
        .downcast_ref::<ApiError>()
        .or_else(|| match err.downcast_ref::<Error>() {
            Some(Error::Api(api)) => Some(api),
            _ => None,
        });

    // A prefix around an empty payload is not a message
    if let Some(Error::Other(detail) | Error::Dialoguer(detail)) = err.downcast_ref::<Error>() {
        if detail.trim().is_empty() {
            return UNEXPECTED_ERROR_MESSAGE.to_string();
        }
    }

    if let Some(api) = api {
        match api {
            ApiError::Status { status, .. } => {
                let message = api.server_message().unwrap_or(UNEXPECTED_ERROR_MESSAGE);
                return format!("Error {}: {}", status, message);
            }
            ApiError::NoResponse(_) => return NO_RESPONSE_MESSAGE.to_string(),
            _ => {}
        }
    }

    if let Some(http) = err.downcast_ref::<reqwest::Error>() {
        if let Some(status) = http.status() {
            return format!("Error {}: {}", status.as_u16(), UNEXPECTED_ERROR_MESSAGE);
        }
        if http.is_connect() || http.is_timeout() || http.is_request() {
            return NO_RESPONSE_MESSAGE.to_string();
        }
    }

    let message = err.to_string();
    if message.trim().is_empty() {
        UNEXPECTED_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}
