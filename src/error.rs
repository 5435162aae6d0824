use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // Local validation errors, raised before any network call
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    // The backend rejected the request and gave a reason
    #[error("{message}")]
    Backend { status: u16, message: String },

    // Transport or body-decoding failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Session file errors
    #[error("Failed to save session to '{path}': {source}")]
    SessionSave {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load session from '{path}': {source}")]
    SessionLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse session file '{path}': {source}")]
    SessionParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // No stored session and the command needs one
    #[error("Not authenticated")]
    NotAuthenticated,

    // Generic errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    /// Field-scoped validation error.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        AppError::Internal {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
