//! Analytics sink seam.

use serde_json::Value;

/// Fire-and-forget event sink. Delivery failures never reach the caller.
pub trait AnalyticsSink: Send + Sync {
    fn track(&self, event: &str, properties: Value);
}
