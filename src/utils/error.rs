use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShieldError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{service} returned status {status}")]
    UpstreamStatusError { service: &'static str, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid bind address: {0}")]
    AddrError(#[from] std::net::AddrParseError),
}

pub type Result<T> = std::result::Result<T, ShieldError>;
