//! HTTP adapters against a local wiremock server.

use std::sync::Arc;
use std::time::Duration;

use hey::adapters::{
    ArweaveUploader, HeyPollService, LeafwatchAnalytics, LensClient, ReqwestHttpClient,
};
use hey::composer::MetadataBuilder;
use hey::error::ApiError;
use hey::models::{
    BroadcastRequest, Channel, MomokaPostRequest, NftFeedRequest, PublicationKind,
    PublicationRequest, RelayResult, SubmissionResponse,
};
use hey::state::composer::PollConfig;
use hey::state::ComposerSession;
use hey::traits::{AnalyticsSink, HttpClient, LensApi, MetadataUploader, PollService, UploadError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn http() -> Arc<dyn HttpClient> {
    Arc::new(ReqwestHttpClient::with_timeout(Duration::from_secs(5)).unwrap())
}

#[tokio::test]
async fn test_post_on_momoka_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("x-access-token", "Bearer jwt-123"))
        .and(body_partial_json(json!({
            "variables": {"request": {"contentURI": "ar://abc"}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"postOnMomoka": {
                "__typename": "CreateMomokaPublicationResult",
                "id": "0x01-0x09-DA-5f2c",
                "proof": "ar://proof"
            }}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = LensClient::new(http(), format!("{}/graphql", server.uri()))
        .with_access_token(Some("jwt-123".to_string()));
    let request = PublicationRequest::PostOnMomoka(MomokaPostRequest {
        content_uri: "ar://abc".to_string(),
    });

    match client.create_publication(&request).await.unwrap() {
        SubmissionResponse::Relayed(result) => {
            assert_eq!(result.reference(), Some("0x01-0x09-DA-5f2c"))
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[tokio::test]
async fn test_broadcast_relay_error_is_a_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"broadcastOnchain": {"__typename": "RelayError", "reason": "REJECTED"}}
        })))
        .mount(&server)
        .await;

    let client = LensClient::new(http(), server.uri());
    let result = client
        .broadcast(
            Channel::Onchain,
            &BroadcastRequest {
                id: "td-1".to_string(),
                signature: "0xsig".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(
        result,
        RelayResult::RelayError {
            reason: "REJECTED".to_string()
        }
    );
}

#[tokio::test]
async fn test_graphql_errors_fail_the_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{"message": "Rate limit exceeded"}]
        })))
        .mount(&server)
        .await;

    let client = LensClient::new(http(), server.uri());
    let err = client
        .nfts(&NftFeedRequest {
            chain_ids: vec![137, 1],
            owner_address: "0xabc".to_string(),
            limit: 10,
            cursor: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::GraphQl { .. }));
    assert_eq!(err.to_string(), "nfts failed: Rate limit exceeded");
}

#[tokio::test]
async fn test_nfts_page_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"request": {"chainIds": [137, 1], "ownerAddress": "0xabc", "limit": 2}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"nfts": {
                "items": [
                    {"chainId": 137, "contractAddress": "0xc0ffee", "tokenId": "1",
                     "name": "One", "collectionName": "Things",
                     "contentUri": "ipfs://one", "originalContent": {"uri": "ipfs://one"}},
                    {"chainId": 1, "contractAddress": "0xbeef", "tokenId": "2"}
                ],
                "pageInfo": {"next": "cursor-2", "prev": null, "totalCount": 5}
            }}
        })))
        .mount(&server)
        .await;

    let client = LensClient::new(http(), server.uri());
    let page = client
        .nfts(&NftFeedRequest {
            chain_ids: vec![137, 1],
            owner_address: "0xabc".to_string(),
            limit: 2,
            cursor: None,
        })
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].key(), "137_0xc0ffee_1");
    assert_eq!(page.page_info.next.as_deref(), Some("cursor-2"));
    assert_eq!(page.page_info.total_count, Some(5));
}

#[tokio::test]
async fn test_metadata_upload_returns_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/metadata"))
        .and(body_partial_json(json!({"lens": {"content": "gm"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "arweave-tx-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = ComposerSession::new();
    session.set_content("gm");
    let metadata = MetadataBuilder::new(&session, &common_profile(), PublicationKind::Post).build();

    let uploader = ArweaveUploader::new(http(), server.uri());
    assert_eq!(uploader.upload(&metadata).await.unwrap(), "arweave-tx-1");
}

#[tokio::test]
async fn test_metadata_upload_without_id_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/metadata"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let mut session = ComposerSession::new();
    session.set_content("gm");
    let metadata = MetadataBuilder::new(&session, &common_profile(), PublicationKind::Post).build();

    let uploader = ArweaveUploader::new(http(), server.uri());
    assert_eq!(
        uploader.upload(&metadata).await.unwrap_err(),
        UploadError::MissingId
    );
}

#[tokio::test]
async fn test_poll_creation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/polls/create"))
        .and(body_partial_json(json!({"length": 1, "options": ["yes", "no"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "poll-77"})))
        .mount(&server)
        .await;

    let service = HeyPollService::new(http(), server.uri());
    let id = service
        .create_poll(&PollConfig {
            length: 1,
            options: vec!["yes".to_string(), "no".to_string()],
        })
        .await
        .unwrap();
    assert_eq!(id, "poll-77");
}

#[tokio::test]
async fn test_leafwatch_delivers_in_background() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/leafwatch/events"))
        .and(body_partial_json(json!({"name": "New post", "actor": "0x01"})))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let analytics =
        LeafwatchAnalytics::new(http(), &server.uri()).with_actor(Some("0x01".to_string()));
    analytics.track("New post", json!({"publication_has_poll": false}));

    let mut delivered = Vec::new();
    for _ in 0..50 {
        delivered = server.received_requests().await.unwrap_or_default();
        if !delivered.is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(delivered.len(), 1);
}

fn common_profile() -> hey::models::Profile {
    hey::models::Profile {
        id: "0x01".to_string(),
        handle: None,
        owned_by: Default::default(),
        signless: true,
        sponsor: true,
    }
}
