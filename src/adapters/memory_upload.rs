//! In-memory content-addressed metadata store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use sha2::{Digest, Sha256};

use crate::models::PublicationMetadata;
use crate::traits::{MetadataUploader, UploadError};

/// Stores documents under the base64url SHA-256 of their JSON encoding.
/// Uploading the same document twice yields the same id.
#[derive(Debug, Clone, Default)]
pub struct MemoryUploader {
    documents: Arc<Mutex<HashMap<String, PublicationMetadata>>>,
}

impl MemoryUploader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_id(bytes: &[u8]) -> String {
        URL_SAFE_NO_PAD.encode(Sha256::digest(bytes))
    }

    pub fn get(&self, id: &str) -> Option<PublicationMetadata> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MetadataUploader for MemoryUploader {
    async fn upload(&self, metadata: &PublicationMetadata) -> Result<String, UploadError> {
        let bytes = serde_json::to_vec(metadata).map_err(|e| UploadError::Encode(e.to_string()))?;
        let id = Self::content_id(&bytes);
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone(), metadata.clone());
        Ok(id)
    }
}
