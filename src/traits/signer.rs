//! Typed-data signing seam.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SignerError {
    #[error("User rejected the signature request")]
    Rejected,

    #[error("No wallet is available to sign typed data")]
    Unavailable,

    #[error("Signing failed: {0}")]
    Failed(String),
}

/// Signs EIP-712 typed data returned by the API.
#[async_trait]
pub trait TypedDataSigner: Send + Sync {
    async fn sign_typed_data(&self, typed_data: &serde_json::Value) -> Result<String, SignerError>;
}
