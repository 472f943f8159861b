use cookapp_client::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ClientError(#[from] ClientError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl AppError {
    /// Process exit status reported by the binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::ValidationError(_) | AppError::ConfigError(_) => 2,
            AppError::ClientError(ClientError::Unauthorized) => 3,
            AppError::NotFound(_) => 4,
            AppError::ClientError(err) if err.is_not_found() => 4,
            AppError::ClientError(ClientError::Transport(_)) => 5,
            AppError::ClientError(_) => 1,
        }
    }

    /// Hint printed next to the error for the user.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            AppError::ClientError(ClientError::Unauthorized) => {
                Some("log in again: set auth.email and auth.password, then run `cookapp login`")
            }
            AppError::ClientError(ClientError::Transport(_)) => {
                Some("check that the backend at api.base_url is reachable")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
