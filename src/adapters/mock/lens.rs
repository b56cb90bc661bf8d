//! In-process Lens API for composer and feed tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::models::{
    BroadcastRequest, Channel, Dispatch, NftFeedRequest, NftPage, Profile, PublicationRequest,
    RelayResult, SubmissionResponse, TypedDataResult,
};
use crate::traits::LensApi;

/// A call made against [`MockLensApi`].
#[derive(Debug, Clone, PartialEq)]
pub enum LensCall {
    Create(PublicationRequest),
    Broadcast(Channel, BroadcastRequest),
    Nfts(NftFeedRequest),
    Profile(String),
}

/// Mock Lens API.
///
/// Without configured responses it behaves like a healthy API: direct
/// requests succeed, typed-data requests return typed data and broadcasts
/// succeed. Queued responses override that, one per call.
#[derive(Debug, Clone, Default)]
pub struct MockLensApi {
    calls: Arc<Mutex<Vec<LensCall>>>,
    create_responses: Arc<Mutex<VecDeque<Result<SubmissionResponse, ApiError>>>>,
    broadcast_responses: Arc<Mutex<VecDeque<Result<RelayResult, ApiError>>>>,
    nft_pages: Arc<Mutex<VecDeque<Result<NftPage, ApiError>>>>,
    profile: Arc<Mutex<Option<Profile>>>,
}

impl MockLensApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_create_response(&self, response: Result<SubmissionResponse, ApiError>) {
        self.create_responses.lock().unwrap().push_back(response);
    }

    pub fn push_broadcast_response(&self, response: Result<RelayResult, ApiError>) {
        self.broadcast_responses.lock().unwrap().push_back(response);
    }

    pub fn push_nft_page(&self, page: NftPage) {
        self.nft_pages.lock().unwrap().push_back(Ok(page));
    }

    pub fn push_nft_error(&self, err: ApiError) {
        self.nft_pages.lock().unwrap().push_back(Err(err));
    }

    pub fn set_profile(&self, profile: Option<Profile>) {
        *self.profile.lock().unwrap() = profile;
    }

    pub fn calls(&self) -> Vec<LensCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Create-publication requests, in order.
    pub fn created(&self) -> Vec<PublicationRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                LensCall::Create(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    pub fn broadcasts(&self) -> Vec<(Channel, BroadcastRequest)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                LensCall::Broadcast(channel, request) => Some((channel, request)),
                _ => None,
            })
            .collect()
    }

    pub fn nft_requests(&self) -> Vec<NftFeedRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                LensCall::Nfts(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: LensCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn success(channel: Channel) -> RelayResult {
        match channel {
            Channel::Momoka => RelayResult::CreateMomokaPublicationResult {
                id: "0x01-0x01-DA-mock".to_string(),
                proof: Some("ar://mock-proof".to_string()),
            },
            Channel::Onchain => RelayResult::RelaySuccess {
                tx_hash: Some("0xmocktx".to_string()),
                tx_id: None,
            },
        }
    }
}

#[async_trait]
impl LensApi for MockLensApi {
    async fn create_publication(
        &self,
        request: &PublicationRequest,
    ) -> Result<SubmissionResponse, ApiError> {
        self.record(LensCall::Create(request.clone()));
        if let Some(response) = self.create_responses.lock().unwrap().pop_front() {
            return response;
        }

        Ok(match request.dispatch() {
            Dispatch::LensManager => SubmissionResponse::Relayed(Self::success(request.channel())),
            Dispatch::TypedData => SubmissionResponse::TypedData(TypedDataResult {
                id: "typed-data-1".to_string(),
                expires_at: None,
                typed_data: serde_json::json!({
                    "types": {},
                    "domain": {},
                    "value": {"contentURI": request.content_uri()}
                }),
            }),
        })
    }

    async fn broadcast(
        &self,
        channel: Channel,
        request: &BroadcastRequest,
    ) -> Result<RelayResult, ApiError> {
        self.record(LensCall::Broadcast(channel, request.clone()));
        if let Some(response) = self.broadcast_responses.lock().unwrap().pop_front() {
            return response;
        }
        Ok(Self::success(channel))
    }

    async fn nfts(&self, request: &NftFeedRequest) -> Result<NftPage, ApiError> {
        self.record(LensCall::Nfts(request.clone()));
        self.nft_pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(NftPage::default()))
    }

    async fn profile(&self, profile_id: &str) -> Result<Option<Profile>, ApiError> {
        self.record(LensCall::Profile(profile_id.to_string()));
        Ok(self.profile.lock().unwrap().clone())
    }
}
