//! Error types

use thiserror::Error;

/// Errors surfaced to callers of the autocomplete API
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied an address or limit outside its constraints
    #[error("{0}")]
    Validation(String),

    /// A required setting (the provider API key) is missing
    #[error("{0}")]
    Configuration(String),

    /// The provider could not be reached or answered with something unusable
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}

/// Failures that happen after a request to the provider was attempted
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error("request failed with status code {status}")]
    Status { status: u16, body: String },

    #[error(transparent)]
    Payload(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream(UpstreamError::Network(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Upstream(UpstreamError::Payload(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
