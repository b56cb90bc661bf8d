//! Lens GraphQL API seam.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{
    BroadcastRequest, Channel, NftFeedRequest, NftPage, Profile, PublicationRequest, RelayResult,
    SubmissionResponse,
};

/// Operations the client performs against the Lens API.
///
/// Relay rejections are returned as `Ok` values carrying a rejection
/// [`RelayResult`]; callers must inspect the result kind.
#[async_trait]
pub trait LensApi: Send + Sync {
    /// Run one of the create-publication mutations.
    async fn create_publication(
        &self,
        request: &PublicationRequest,
    ) -> Result<SubmissionResponse, ApiError>;

    /// Broadcast signed typed data on the given channel.
    async fn broadcast(
        &self,
        channel: Channel,
        request: &BroadcastRequest,
    ) -> Result<RelayResult, ApiError>;

    /// Fetch one page of NFTs owned by an address.
    async fn nfts(&self, request: &NftFeedRequest) -> Result<NftPage, ApiError>;

    /// Look up a profile by id.
    async fn profile(&self, profile_id: &str) -> Result<Option<Profile>, ApiError>;
}
