//! Startup wiring: stored credentials to an authenticated Lens session.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hey::auth::{Credentials, CredentialsManager};
use hey::cli::Session;
use hey::config::ClientConfig;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn jwt(exp: i64) -> String {
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"id":"0x01","exp":{}}}"#, exp));
    format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", payload)
}

async fn profile_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": {"request": {"forProfileId": "0x01"}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"profile": {
                "id": "0x01",
                "handle": {"localName": "alice", "fullHandle": "lens/alice"},
                "ownedBy": {"address": "0xa11ce"},
                "signless": true,
                "sponsor": true
            }}
        })))
        .mount(&server)
        .await;
    server
}

fn saved_session(temp_dir: &TempDir, token: String) -> Credentials {
    let manager = CredentialsManager::in_dir(temp_dir.path());
    manager
        .save(&Credentials::for_profile("0x01", token))
        .unwrap();
    manager.load()
}

#[tokio::test]
async fn test_valid_token_is_sent() {
    let temp_dir = TempDir::new().unwrap();
    let token = jwt(chrono::Utc::now().timestamp() + 3600);
    let credentials = saved_session(&temp_dir, token.clone());
    let server = profile_server().await;

    let config = ClientConfig::default().with_lens_api_url(server.uri());
    let session = Session::connect(config, &credentials).unwrap();
    let profile = session.profile().await.unwrap().unwrap();

    assert_eq!(profile.slug_with_prefix(), "@alice");
    assert!(profile.can_use_lens_manager());
    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0]
            .headers
            .get("x-access-token")
            .and_then(|v| v.to_str().ok()),
        Some(format!("Bearer {}", token).as_str())
    );
}

#[tokio::test]
async fn test_expired_token_is_not_sent() {
    let temp_dir = TempDir::new().unwrap();
    let credentials = saved_session(&temp_dir, jwt(0));
    let server = profile_server().await;

    let config = ClientConfig::default().with_lens_api_url(server.uri());
    let session = Session::connect(config, &credentials).unwrap();
    session.profile().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("x-access-token").is_none());
}

#[tokio::test]
async fn test_no_profile_id_skips_lookup() {
    let server = MockServer::start().await;
    let config = ClientConfig::default().with_lens_api_url(server.uri());
    let session = Session::connect(config, &Credentials::default()).unwrap();

    assert!(session.profile().await.unwrap().is_none());
    assert!(server.received_requests().await.unwrap().is_empty());
}
