use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("voice resolution error: {0}")]
    VoiceResolution(String),
    #[error("synthesis error: {0}")]
    Synthesis(String),
    #[error("encoding error: {0}")]
    Encoding(String),
    #[error("voice catalog error: {0}")]
    Catalog(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::VoiceResolution(msg) => AppError::VoiceResolution(msg),
            TtsServiceError::Synthesis(msg) => AppError::Synthesis(msg),
            TtsServiceError::Encoding(msg) => AppError::Encoding(msg),
            TtsServiceError::Catalog(msg) => AppError::VoiceCatalog(msg),
            TtsServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
