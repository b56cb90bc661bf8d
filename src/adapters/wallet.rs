//! Signer used when no wallet is connected.

use async_trait::async_trait;

use crate::traits::{SignerError, TypedDataSigner};

/// Refuses every signature request. Profiles without the lens manager
/// cannot publish through it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWalletSigner;

#[async_trait]
impl TypedDataSigner for NoWalletSigner {
    async fn sign_typed_data(&self, _typed_data: &serde_json::Value) -> Result<String, SignerError> {
        Err(SignerError::Unavailable)
    }
}
