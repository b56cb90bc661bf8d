//! Content-addressed metadata upload seam.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::PublicationMetadata;
use crate::traits::HttpError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum UploadError {
    #[error("Metadata upload failed: {0}")]
    Http(#[from] HttpError),

    #[error("Metadata could not be encoded: {0}")]
    Encode(String),

    #[error("Upload service returned no id")]
    MissingId,
}

/// Stores a metadata document and returns its content identifier.
#[async_trait]
pub trait MetadataUploader: Send + Sync {
    async fn upload(&self, metadata: &PublicationMetadata) -> Result<String, UploadError>;
}

/// Pointer to an uploaded document, as used in `contentURI`.
pub fn arweave_uri(id: &str) -> String {
    format!("ar://{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arweave_uri() {
        assert_eq!(arweave_uri("abc"), "ar://abc");
    }
}
