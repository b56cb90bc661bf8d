//! Lens GraphQL client over [`HttpClient`].
//!
//! Every call POSTs `{query, variables}` to the API endpoint. A response with
//! `errors` is a failure even when the HTTP status is 200.

pub mod documents;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    BroadcastRequest, Channel, Dispatch, NftFeedRequest, NftPage, Profile, PublicationRequest,
    RelayResult, SubmissionResponse, TypedDataResult,
};
use crate::traits::{json_headers, HttpClient, HttpError, LensApi};

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

pub struct LensClient {
    http: Arc<dyn HttpClient>,
    endpoint: String,
    access_token: Option<String>,
}

impl LensClient {
    pub fn new(http: Arc<dyn HttpClient>, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            access_token: None,
        }
    }

    /// Authenticate requests with a Lens access token.
    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run a document and return `data.<field>` as raw JSON.
    async fn execute(&self, field: &str, query: &str, variables: Value) -> ApiResult<Value> {
        let body = json!({ "query": query, "variables": variables }).to_string();
        let headers = json_headers(self.access_token.as_deref());

        debug!(operation = field, "Lens API request");
        let response = self.http.post(&self.endpoint, &body, &headers).await?;

        let envelope: GraphQlResponse = match response.json() {
            Ok(envelope) => envelope,
            Err(_) if !response.is_success() => {
                return Err(ApiError::Http(HttpError::ServerError {
                    status: response.status,
                    message: response.text().unwrap_or_default(),
                }));
            }
            Err(err) => return Err(ApiError::decode(field, err)),
        };

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            return Err(ApiError::GraphQl {
                operation: field.to_string(),
                messages: errors.into_iter().map(|e| e.message).collect(),
            });
        }
        if !response.is_success() {
            return Err(ApiError::Http(HttpError::ServerError {
                status: response.status,
                message: response.text().unwrap_or_default(),
            }));
        }

        envelope
            .data
            .and_then(|mut data| data.get_mut(field).map(Value::take))
            .ok_or_else(|| ApiError::MissingData {
                operation: field.to_string(),
            })
    }

    async fn query<T: DeserializeOwned>(
        &self,
        field: &str,
        query: &str,
        variables: Value,
    ) -> ApiResult<T> {
        let value = self.execute(field, query, variables).await?;
        serde_json::from_value(value).map_err(|err| ApiError::decode(field, err))
    }
}

#[async_trait]
impl LensApi for LensClient {
    async fn create_publication(
        &self,
        request: &PublicationRequest,
    ) -> ApiResult<SubmissionResponse> {
        let field = request.operation();
        let document = documents::publication_document(request);
        let variables = request
            .variables()
            .map_err(|err| ApiError::decode(field, err))?;

        match request.dispatch() {
            Dispatch::LensManager => self
                .query::<RelayResult>(field, &document, variables)
                .await
                .map(SubmissionResponse::Relayed),
            Dispatch::TypedData => self
                .query::<TypedDataResult>(field, &document, variables)
                .await
                .map(SubmissionResponse::TypedData),
        }
    }

    async fn broadcast(
        &self,
        channel: Channel,
        request: &BroadcastRequest,
    ) -> ApiResult<RelayResult> {
        let field = documents::broadcast_operation(channel);
        let variables = json!({ "request": request });
        self.query(field, &documents::broadcast_document(channel), variables)
            .await
    }

    async fn nfts(&self, request: &NftFeedRequest) -> ApiResult<NftPage> {
        let variables = json!({ "request": request });
        self.query("nfts", documents::NFTS, variables).await
    }

    async fn profile(&self, profile_id: &str) -> ApiResult<Option<Profile>> {
        let variables = json!({ "request": { "forProfileId": profile_id } });
        match self.execute("profile", documents::PROFILE, variables).await {
            Ok(Value::Null) => Ok(None),
            Ok(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|err| ApiError::decode("profile", err)),
            Err(ApiError::MissingData { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::models::MomokaPostRequest;

    const ENDPOINT: &str = "https://api-v2.lens.dev";

    fn client(http: &MockHttpClient) -> LensClient {
        LensClient::new(Arc::new(http.clone()), ENDPOINT).with_access_token(Some("jwt".into()))
    }

    fn post_request() -> PublicationRequest {
        PublicationRequest::PostOnMomoka(MomokaPostRequest {
            content_uri: "ar://abc".into(),
        })
    }

    #[tokio::test]
    async fn test_relay_result_and_headers() {
        let http = MockHttpClient::new();
        http.set_response(
            ENDPOINT,
            MockResponse::json(json!({
                "data": {"postOnMomoka": {
                    "__typename": "CreateMomokaPublicationResult",
                    "id": "0x01-0x02-DA-1", "proof": "ar://proof"
                }}
            })),
        );

        let response = client(&http).create_publication(&post_request()).await.unwrap();
        match response {
            SubmissionResponse::Relayed(result) => {
                assert_eq!(result.reference(), Some("0x01-0x02-DA-1"))
            }
            other => panic!("unexpected response: {:?}", other),
        }

        let sent = &http.get_requests()[0];
        assert_eq!(
            sent.headers.get("x-access-token").map(String::as_str),
            Some("Bearer jwt")
        );
        let body = sent.json().unwrap();
        assert_eq!(body["variables"]["request"]["contentURI"], "ar://abc");
        assert!(body["query"].as_str().unwrap().contains("postOnMomoka"));
    }

    #[tokio::test]
    async fn test_errors_fail_with_status_200() {
        let http = MockHttpClient::new();
        http.set_response(
            ENDPOINT,
            MockResponse::json(json!({
                "data": null,
                "errors": [{"message": "Unauthenticated"}]
            })),
        );

        let err = client(&http)
            .create_publication(&post_request())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "postOnMomoka failed: Unauthenticated");
    }

    #[tokio::test]
    async fn test_relay_rejection_is_ok() {
        let http = MockHttpClient::new();
        http.set_response(
            ENDPOINT,
            MockResponse::json(json!({
                "data": {"postOnMomoka": {
                    "__typename": "LensProfileManagerRelayError",
                    "reason": "NOT_SPONSORED"
                }}
            })),
        );

        match client(&http).create_publication(&post_request()).await {
            Ok(SubmissionResponse::Relayed(result)) => assert!(result.is_rejection()),
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_profile_is_none() {
        let http = MockHttpClient::new();
        http.set_response(ENDPOINT, MockResponse::json(json!({"data": {"profile": null}})));

        assert_eq!(client(&http).profile("0x99").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_server_error_without_envelope() {
        let http = MockHttpClient::new();
        http.set_response(
            ENDPOINT,
            MockResponse::Success(crate::traits::Response::new(
                502,
                bytes::Bytes::from("Bad Gateway"),
            )),
        );

        let err = client(&http)
            .nfts(&NftFeedRequest {
                chain_ids: vec![137, 1],
                owner_address: "0xabc".into(),
                limit: 10,
                cursor: None,
            })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Http(HttpError::ServerError {
                status: 502,
                message: "Bad Gateway".into()
            })
        );
    }
}
