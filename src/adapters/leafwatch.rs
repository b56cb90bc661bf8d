//! Fire-and-forget analytics delivery to the hey Leafwatch endpoint.

use std::sync::Arc;

use serde_json::{json, Value};
use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::traits::{json_headers, AnalyticsSink, HttpClient};

pub struct LeafwatchAnalytics {
    http: Arc<dyn HttpClient>,
    events_url: String,
    actor: Option<String>,
}

impl LeafwatchAnalytics {
    pub fn new(http: Arc<dyn HttpClient>, api_url: &str) -> Self {
        Self {
            http,
            events_url: format!("{}/leafwatch/events", api_url.trim_end_matches('/')),
            actor: None,
        }
    }

    /// Attribute events to a profile.
    pub fn with_actor(mut self, profile_id: Option<String>) -> Self {
        self.actor = profile_id;
        self
    }

    fn payload(&self, event: &str, properties: Value) -> Value {
        json!({
            "name": event,
            "actor": self.actor,
            "properties": properties,
            "platform": "cli",
        })
    }
}

impl AnalyticsSink for LeafwatchAnalytics {
    fn track(&self, event: &str, properties: Value) {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                debug!(event, "No runtime; dropping analytics event");
                return;
            }
        };

        let http = self.http.clone();
        let url = self.events_url.clone();
        let body = self.payload(event, properties).to_string();
        let event = event.to_string();
        handle.spawn(async move {
            match http.post(&url, &body, &json_headers(None)).await {
                Ok(response) if response.is_success() => {}
                Ok(response) => warn!(%event, status = response.status, "Leafwatch rejected event"),
                Err(err) => warn!(%event, "Failed to deliver analytics event: {}", err),
            }
        });
    }
}
