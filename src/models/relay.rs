//! Results of create-publication and broadcast mutations.

use serde::{Deserialize, Serialize};

/// Union returned by every direct or broadcast mutation, discriminated by
/// `__typename`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "__typename")]
pub enum RelayResult {
    CreateMomokaPublicationResult {
        id: String,
        #[serde(default)]
        proof: Option<String>,
    },
    RelaySuccess {
        #[serde(rename = "txHash", default)]
        tx_hash: Option<String>,
        #[serde(rename = "txId", default)]
        tx_id: Option<String>,
    },
    RelayError {
        reason: String,
    },
    LensProfileManagerRelayError {
        reason: String,
    },
}

impl RelayResult {
    /// Both relay error kinds are failures even though the call succeeded.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            RelayResult::RelayError { .. } | RelayResult::LensProfileManagerRelayError { .. }
        )
    }

    pub fn typename(&self) -> &'static str {
        match self {
            RelayResult::CreateMomokaPublicationResult { .. } => "CreateMomokaPublicationResult",
            RelayResult::RelaySuccess { .. } => "RelaySuccess",
            RelayResult::RelayError { .. } => "RelayError",
            RelayResult::LensProfileManagerRelayError { .. } => "LensProfileManagerRelayError",
        }
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        match self {
            RelayResult::RelayError { reason }
            | RelayResult::LensProfileManagerRelayError { reason } => Some(reason),
            _ => None,
        }
    }

    /// Identifier of what was created: Momoka id or transaction hash/id.
    pub fn reference(&self) -> Option<&str> {
        match self {
            RelayResult::CreateMomokaPublicationResult { id, .. } => Some(id),
            RelayResult::RelaySuccess { tx_hash, tx_id } => {
                tx_hash.as_deref().or(tx_id.as_deref())
            }
            _ => None,
        }
    }
}

/// Broadcast item returned by the typed-data mutations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TypedDataResult {
    pub id: String,
    #[serde(default)]
    pub expires_at: Option<String>,
    /// EIP-712 `{types, domain, value}` document
    pub typed_data: serde_json::Value,
}

/// What a create-publication mutation returned.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResponse {
    Relayed(RelayResult),
    TypedData(TypedDataResult),
}
