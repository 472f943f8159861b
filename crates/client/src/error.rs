use reqwest::StatusCode;
use thiserror::Error;

/// Failure to exchange a request with the backend at all.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The backend rejected the credential. Renewable requests only end up
    /// here after their one renewal attempt; the caller should send the user
    /// through login again.
    #[error("unauthorized: the backend rejected the credential")]
    Unauthorized,

    #[error("request failed with status {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
