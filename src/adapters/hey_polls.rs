//! Poll creation through the hey API.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::state::composer::PollConfig;
use crate::traits::{json_headers, HttpClient, HttpError, PollError, PollService};

#[derive(Debug, Deserialize)]
struct CreatePollResponse {
    id: String,
}

pub struct HeyPollService {
    http: Arc<dyn HttpClient>,
    api_url: String,
    access_token: Option<String>,
}

impl HeyPollService {
    pub fn new(http: Arc<dyn HttpClient>, api_url: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into(),
            access_token: None,
        }
    }

    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token;
        self
    }
}

#[async_trait]
impl PollService for HeyPollService {
    async fn create_poll(&self, poll: &PollConfig) -> Result<String, PollError> {
        let url = format!("{}/polls/create", self.api_url.trim_end_matches('/'));
        let body = serde_json::to_string(poll).map_err(|e| PollError::Decode(e.to_string()))?;
        let response = self
            .http
            .post(&url, &body, &json_headers(self.access_token.as_deref()))
            .await?;

        if !response.is_success() {
            return Err(PollError::Http(HttpError::ServerError {
                status: response.status,
                message: response.text().unwrap_or_default(),
            }));
        }

        let created: CreatePollResponse = response
            .json()
            .map_err(|e| PollError::Decode(e.to_string()))?;
        Ok(created.id)
    }
}
