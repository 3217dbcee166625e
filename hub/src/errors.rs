//! Error types for the agent hub

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HubError {
    /// Auto-assignment found no active agent
    #[error("No available agents")]
    NoAgentAvailable,

    /// Request passed JSON decoding but is not usable
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}

pub type HubResult<T> = Result<T, HubError>;
