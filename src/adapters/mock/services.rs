//! Test doubles for the poll service, the signer and the analytics sink.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};

use crate::state::composer::PollConfig;
use crate::traits::{AnalyticsSink, PollError, PollService, SignerError, TypedDataSigner};

/// Poll service answering with a fixed id, or a fixed error.
#[derive(Debug, Clone)]
pub struct StaticPollService {
    result: Result<String, PollError>,
    created: Arc<Mutex<Vec<PollConfig>>>,
}

impl StaticPollService {
    pub fn new(id: &str) -> Self {
        Self {
            result: Ok(id.to_string()),
            created: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(err: PollError) -> Self {
        Self {
            result: Err(err),
            created: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn created(&self) -> Vec<PollConfig> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl PollService for StaticPollService {
    async fn create_poll(&self, config: &PollConfig) -> Result<String, PollError> {
        self.created.lock().unwrap().push(config.clone());
        self.result.clone()
    }
}

/// Signer returning a fixed signature, or a fixed error.
#[derive(Debug, Clone)]
pub struct StaticSigner {
    result: Result<String, SignerError>,
    signed: Arc<Mutex<Vec<Value>>>,
}

impl StaticSigner {
    pub fn new(signature: &str) -> Self {
        Self {
            result: Ok(signature.to_string()),
            signed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(err: SignerError) -> Self {
        Self {
            result: Err(err),
            signed: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn signed(&self) -> Vec<Value> {
        self.signed.lock().unwrap().clone()
    }
}

#[async_trait]
impl TypedDataSigner for StaticSigner {
    async fn sign_typed_data(&self, typed_data: &Value) -> Result<String, SignerError> {
        self.signed.lock().unwrap().push(typed_data.clone());
        self.result.clone()
    }
}

/// Analytics sink keeping every event in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnalytics {
    events: Arc<Mutex<Vec<(String, Value)>>>,
}

impl RecordingAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, Value)> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_names(&self) -> Vec<String> {
        self.events().into_iter().map(|(name, _)| name).collect()
    }
}

impl AnalyticsSink for RecordingAnalytics {
    fn track(&self, event: &str, properties: Value) {
        self.events
            .lock()
            .unwrap()
            .push((event.to_string(), properties));
    }
}
