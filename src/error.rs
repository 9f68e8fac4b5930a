use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Price data not found for crop: {crop}")]
    CropNotFound { crop: String },

    #[error("GOOGLE_API_KEY environment variable not set")]
    MissingCredential,

    #[error("Invalid API credential: {reason}")]
    InvalidCredential { reason: String },

    #[error("Completion API returned {status}: {message}")]
    Completion { status: u16, message: String },

    #[error("Completion API returned no text")]
    EmptyCompletion,

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn error_type(&self) -> &'static str {
        match self {
            Error::CropNotFound { .. } => "CROP_NOT_FOUND",
            Error::MissingCredential => "MISSING_CREDENTIAL",
            Error::InvalidCredential { .. } => "INVALID_CREDENTIAL",
            Error::Completion { .. } => "COMPLETION_FAILED",
            Error::EmptyCompletion => "EMPTY_COMPLETION",
            Error::Request(_) => "REQUEST_ERROR",
            Error::Json(_) => "JSON_ERROR",
        }
    }

    /// Whether the error came from talking to the completion API rather than
    /// from local configuration or data lookups.
    pub fn is_external(&self) -> bool {
        matches!(
            self,
            Error::Completion { .. } | Error::EmptyCompletion | Error::Request(_) | Error::Json(_)
        )
    }
}

#[cfg(test)]
mod tests;
