//! Mock wiring for test fixtures.
//!
//! Re-exports the mock implementations from `hey::adapters::mock` and
//! bundles them into a composer harness.

#![allow(dead_code)]

use std::sync::Arc;

pub use hey::adapters::mock::{
    LensCall, MemoryUploader, MockHttpClient, MockLensApi, MockResponse, RecordingAnalytics,
    StaticPollService, StaticSigner,
};

use hey::composer::{Composer, ComposerServices};
use hey::models::PublicationRef;
use hey::state::NonceStore;
use hey::traits::{PollService, TypedDataSigner};

/// Composer services backed by recording mocks.
pub struct Harness {
    pub api: Arc<MockLensApi>,
    pub uploader: Arc<MemoryUploader>,
    pub analytics: Arc<RecordingAnalytics>,
    pub polls: Arc<StaticPollService>,
    pub signer: Arc<StaticSigner>,
    pub nonce: NonceStore,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            api: Arc::new(MockLensApi::new()),
            uploader: Arc::new(MemoryUploader::new()),
            analytics: Arc::new(RecordingAnalytics::new()),
            polls: Arc::new(StaticPollService::new("poll-1")),
            signer: Arc::new(StaticSigner::new("0xsignature")),
            nonce: NonceStore::new(0),
        }
    }

    pub fn with_polls(mut self, polls: StaticPollService) -> Self {
        self.polls = Arc::new(polls);
        self
    }

    pub fn with_signer(mut self, signer: StaticSigner) -> Self {
        self.signer = Arc::new(signer);
        self
    }

    pub fn services(&self) -> ComposerServices {
        let polls: Arc<dyn PollService> = self.polls.clone();
        let signer: Arc<dyn TypedDataSigner> = self.signer.clone();
        ComposerServices {
            api: self.api.clone(),
            uploader: self.uploader.clone(),
            polls,
            signer,
            analytics: self.analytics.clone(),
            nonce: self.nonce.clone(),
        }
    }

    pub fn composer(&self) -> Composer {
        Composer::new(self.services())
    }

    pub fn comment_composer(&self, target: &str) -> Composer {
        Composer::for_comment(self.services(), PublicationRef::new(target))
    }
}

/// Signer that parks every request until released, so tests can act while
/// a submission is in flight.
#[derive(Default)]
pub struct GatedSigner {
    entered: tokio::sync::Notify,
    release: tokio::sync::Notify,
}

impl GatedSigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until a signature has been requested.
    pub async fn wait_entered(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[async_trait::async_trait]
impl TypedDataSigner for GatedSigner {
    async fn sign_typed_data(
        &self,
        _typed_data: &serde_json::Value,
    ) -> Result<String, hey::traits::SignerError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok("0xgated".to_string())
    }
}
