use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    BadRequest(String),

    /// Body could not be read as the expected JSON; keeps the extractor's status
    #[error("Invalid request body: {message}")]
    InvalidBody { status: StatusCode, message: String },

    #[error("Voice resolution failed: {0}")]
    VoiceResolution(String),

    #[error("Synthesis failed: {0}")]
    Synthesis(String),

    #[error("Encoding failed: {0}")]
    Encoding(String),

    #[error("Error listing voices: {0}")]
    VoiceCatalog(String),

    #[error("Error listing samplers: {0}")]
    Samplers(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body: `{"detail": "<message>"}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl AppError {
    /// Get the HTTP status code for this error.
    ///
    /// Every failure past request validation is reported as a 500; callers get
    /// no differentiated status or retry guidance.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::InvalidBody { status, .. } => *status,
            Self::VoiceResolution(_)
            | Self::Synthesis(_)
            | Self::Encoding(_)
            | Self::VoiceCatalog(_)
            | Self::Samplers(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            detail: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Request failed"
        );

        (status, Json(self.to_response())).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
