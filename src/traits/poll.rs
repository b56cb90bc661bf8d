//! Poll creation seam.

use async_trait::async_trait;
use thiserror::Error;

use crate::state::composer::PollConfig;
use crate::traits::HttpError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PollError {
    #[error("Poll creation failed: {0}")]
    Http(#[from] HttpError),

    #[error("Poll service returned an unexpected response: {0}")]
    Decode(String),
}

/// Creates a poll ahead of the publication and returns its id.
#[async_trait]
pub trait PollService: Send + Sync {
    async fn create_poll(&self, config: &PollConfig) -> Result<String, PollError>;
}
