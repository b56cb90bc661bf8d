//! Metadata upload to the hey metadata service, which pins documents on
//! Arweave and answers with their id.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::models::PublicationMetadata;
use crate::traits::{json_headers, HttpClient, HttpError, MetadataUploader, UploadError};

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    id: Option<String>,
}

pub struct ArweaveUploader {
    http: Arc<dyn HttpClient>,
    metadata_url: String,
}

impl ArweaveUploader {
    pub fn new(http: Arc<dyn HttpClient>, metadata_url: impl Into<String>) -> Self {
        Self {
            http,
            metadata_url: metadata_url.into(),
        }
    }

    fn upload_url(&self) -> String {
        format!("{}/metadata", self.metadata_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl MetadataUploader for ArweaveUploader {
    async fn upload(&self, metadata: &PublicationMetadata) -> Result<String, UploadError> {
        let body =
            serde_json::to_string(metadata).map_err(|e| UploadError::Encode(e.to_string()))?;
        let response = self
            .http
            .post(&self.upload_url(), &body, &json_headers(None))
            .await?;

        if !response.is_success() {
            return Err(UploadError::Http(HttpError::ServerError {
                status: response.status,
                message: response.text().unwrap_or_default(),
            }));
        }

        let parsed: UploadResponse = response
            .json()
            .map_err(|e| UploadError::Http(HttpError::Other(e.to_string())))?;
        let id = parsed
            .id
            .filter(|id| !id.is_empty())
            .ok_or(UploadError::MissingId)?;
        debug!(%id, "Metadata stored");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::models::{LensMetadata, MainContentFocus, Marketplace};
    use serde_json::json;

    fn metadata() -> PublicationMetadata {
        PublicationMetadata {
            schema: MainContentFocus::TextOnly.schema_url(),
            lens: LensMetadata {
                id: "doc".into(),
                locale: "en".into(),
                main_content_focus: MainContentFocus::TextOnly,
                content: Some("gm".into()),
                title: None,
                attributes: None,
                image: None,
                audio: None,
                video: None,
                attachments: None,
                live_url: None,
                playback_url: None,
                starts_at: None,
            },
            marketplace: Marketplace {
                name: "Post by @alice".into(),
                description: Some("gm".into()),
                external_url: "https://hey.xyz/u/alice".into(),
                animation_url: "ipfs://x".into(),
            },
        }
    }

    #[tokio::test]
    async fn test_upload_returns_id() {
        let http = MockHttpClient::new();
        http.set_response(
            "https://metadata.hey.xyz/metadata",
            MockResponse::json(json!({"id": "tx-1"})),
        );
        let uploader = ArweaveUploader::new(Arc::new(http.clone()), "https://metadata.hey.xyz/");

        assert_eq!(uploader.upload(&metadata()).await.unwrap(), "tx-1");
        let body = http.get_requests()[0].json().unwrap();
        assert_eq!(body["lens"]["content"], "gm");
    }

    #[tokio::test]
    async fn test_missing_id() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(json!({})));
        let uploader = ArweaveUploader::new(Arc::new(http), "https://metadata.hey.xyz");

        assert_eq!(
            uploader.upload(&metadata()).await.unwrap_err(),
            UploadError::MissingId
        );
    }
}
