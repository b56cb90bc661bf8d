//! Create-publication requests.
//!
//! The API exposes one mutation per (kind, channel, dispatch) triple. They
//! are modelled as a closed enum so every branch of the submission decision
//! maps to exactly one variant.

use serde::{Deserialize, Serialize};

use super::modules::{OpenActionModuleInput, ReferenceModuleInput};
use super::publication::PublicationKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MomokaPostRequest {
    #[serde(rename = "contentURI")]
    pub content_uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MomokaCommentRequest {
    #[serde(rename = "commentOn")]
    pub comment_on: String,
    #[serde(rename = "contentURI")]
    pub content_uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MomokaQuoteRequest {
    #[serde(rename = "quoteOn")]
    pub quote_on: String,
    #[serde(rename = "contentURI")]
    pub content_uri: String,
}

/// Fields shared by every on-chain request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OnchainPayload {
    #[serde(rename = "contentURI")]
    pub content_uri: String,
    pub open_action_modules: Vec<OpenActionModuleInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_module: Option<ReferenceModuleInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OnchainPostRequest {
    #[serde(flatten)]
    pub payload: OnchainPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OnchainCommentRequest {
    #[serde(rename = "commentOn")]
    pub comment_on: String,
    #[serde(flatten)]
    pub payload: OnchainPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OnchainQuoteRequest {
    #[serde(rename = "quoteOn")]
    pub quote_on: String,
    #[serde(flatten)]
    pub payload: OnchainPayload,
}

/// Options for on-chain typed data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypedDataOptions {
    #[serde(rename = "overrideSigNonce")]
    pub override_sig_nonce: u64,
}

/// Relay path of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Momoka: relayed with a data-availability proof
    Momoka,
    Onchain,
}

/// How the request is authorised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dispatch {
    /// Submitted directly by the lens manager
    LensManager,
    /// Typed data returned for the user to sign and broadcast
    TypedData,
}

/// Every create-publication mutation the composer can issue.
#[derive(Debug, Clone, PartialEq)]
pub enum PublicationRequest {
    PostOnMomoka(MomokaPostRequest),
    CommentOnMomoka(MomokaCommentRequest),
    QuoteOnMomoka(MomokaQuoteRequest),
    CreateMomokaPostTypedData(MomokaPostRequest),
    CreateMomokaCommentTypedData(MomokaCommentRequest),
    CreateMomokaQuoteTypedData(MomokaQuoteRequest),
    PostOnchain(OnchainPostRequest),
    CommentOnchain(OnchainCommentRequest),
    QuoteOnchain(OnchainQuoteRequest),
    CreateOnchainPostTypedData {
        request: OnchainPostRequest,
        options: TypedDataOptions,
    },
    CreateOnchainCommentTypedData {
        request: OnchainCommentRequest,
        options: TypedDataOptions,
    },
    CreateOnchainQuoteTypedData {
        request: OnchainQuoteRequest,
        options: TypedDataOptions,
    },
}

impl PublicationRequest {
    pub fn kind(&self) -> PublicationKind {
        use PublicationRequest::*;
        match self {
            PostOnMomoka(_)
            | CreateMomokaPostTypedData(_)
            | PostOnchain(_)
            | CreateOnchainPostTypedData { .. } => PublicationKind::Post,
            CommentOnMomoka(_)
            | CreateMomokaCommentTypedData(_)
            | CommentOnchain(_)
            | CreateOnchainCommentTypedData { .. } => PublicationKind::Comment,
            QuoteOnMomoka(_)
            | CreateMomokaQuoteTypedData(_)
            | QuoteOnchain(_)
            | CreateOnchainQuoteTypedData { .. } => PublicationKind::Quote,
        }
    }

    pub fn channel(&self) -> Channel {
        use PublicationRequest::*;
        match self {
            PostOnMomoka(_)
            | CommentOnMomoka(_)
            | QuoteOnMomoka(_)
            | CreateMomokaPostTypedData(_)
            | CreateMomokaCommentTypedData(_)
            | CreateMomokaQuoteTypedData(_) => Channel::Momoka,
            _ => Channel::Onchain,
        }
    }

    pub fn dispatch(&self) -> Dispatch {
        use PublicationRequest::*;
        match self {
            PostOnMomoka(_)
            | CommentOnMomoka(_)
            | QuoteOnMomoka(_)
            | PostOnchain(_)
            | CommentOnchain(_)
            | QuoteOnchain(_) => Dispatch::LensManager,
            _ => Dispatch::TypedData,
        }
    }

    /// Name of the GraphQL mutation field this request maps to.
    pub fn operation(&self) -> &'static str {
        use PublicationRequest::*;
        match self {
            PostOnMomoka(_) => "postOnMomoka",
            CommentOnMomoka(_) => "commentOnMomoka",
            QuoteOnMomoka(_) => "quoteOnMomoka",
            CreateMomokaPostTypedData(_) => "createMomokaPostTypedData",
            CreateMomokaCommentTypedData(_) => "createMomokaCommentTypedData",
            CreateMomokaQuoteTypedData(_) => "createMomokaQuoteTypedData",
            PostOnchain(_) => "postOnchain",
            CommentOnchain(_) => "commentOnchain",
            QuoteOnchain(_) => "quoteOnchain",
            CreateOnchainPostTypedData { .. } => "createOnchainPostTypedData",
            CreateOnchainCommentTypedData { .. } => "createOnchainCommentTypedData",
            CreateOnchainQuoteTypedData { .. } => "createOnchainQuoteTypedData",
        }
    }

    pub fn content_uri(&self) -> &str {
        use PublicationRequest::*;
        match self {
            PostOnMomoka(r) | CreateMomokaPostTypedData(r) => &r.content_uri,
            CommentOnMomoka(r) | CreateMomokaCommentTypedData(r) => &r.content_uri,
            QuoteOnMomoka(r) | CreateMomokaQuoteTypedData(r) => &r.content_uri,
            PostOnchain(r) | CreateOnchainPostTypedData { request: r, .. } => {
                &r.payload.content_uri
            }
            CommentOnchain(r) | CreateOnchainCommentTypedData { request: r, .. } => {
                &r.payload.content_uri
            }
            QuoteOnchain(r) | CreateOnchainQuoteTypedData { request: r, .. } => {
                &r.payload.content_uri
            }
        }
    }

    /// GraphQL variables for the mutation.
    pub fn variables(&self) -> serde_json::Result<serde_json::Value> {
        use PublicationRequest::*;
        let (request, options) = match self {
            PostOnMomoka(r) | CreateMomokaPostTypedData(r) => (serde_json::to_value(r)?, None),
            CommentOnMomoka(r) | CreateMomokaCommentTypedData(r) => {
                (serde_json::to_value(r)?, None)
            }
            QuoteOnMomoka(r) | CreateMomokaQuoteTypedData(r) => (serde_json::to_value(r)?, None),
            PostOnchain(r) => (serde_json::to_value(r)?, None),
            CommentOnchain(r) => (serde_json::to_value(r)?, None),
            QuoteOnchain(r) => (serde_json::to_value(r)?, None),
            CreateOnchainPostTypedData { request, options } => {
                (serde_json::to_value(request)?, Some(options))
            }
            CreateOnchainCommentTypedData { request, options } => {
                (serde_json::to_value(request)?, Some(options))
            }
            CreateOnchainQuoteTypedData { request, options } => {
                (serde_json::to_value(request)?, Some(options))
            }
        };

        let mut variables = serde_json::json!({ "request": request });
        if let Some(options) = options {
            variables["options"] = serde_json::to_value(options)?;
        }
        Ok(variables)
    }
}

/// Signed typed data handed back for broadcasting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BroadcastRequest {
    pub id: String,
    pub signature: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn onchain_payload() -> OnchainPayload {
        OnchainPayload {
            content_uri: "ar://abc".to_string(),
            open_action_modules: vec![],
            reference_module: None,
        }
    }

    #[test]
    fn test_momoka_post_variables() {
        let request = PublicationRequest::PostOnMomoka(MomokaPostRequest {
            content_uri: "ar://abc".to_string(),
        });
        assert_eq!(
            request.variables().unwrap(),
            serde_json::json!({"request": {"contentURI": "ar://abc"}})
        );
        assert_eq!(request.operation(), "postOnMomoka");
        assert_eq!(request.channel(), Channel::Momoka);
        assert_eq!(request.dispatch(), Dispatch::LensManager);
    }

    #[test]
    fn test_onchain_comment_typed_data_variables() {
        let request = PublicationRequest::CreateOnchainCommentTypedData {
            request: OnchainCommentRequest {
                comment_on: "0x01-0x02".to_string(),
                payload: onchain_payload(),
            },
            options: TypedDataOptions {
                override_sig_nonce: 7,
            },
        };

        let variables = request.variables().unwrap();
        assert_eq!(variables["request"]["commentOn"], "0x01-0x02");
        assert_eq!(variables["request"]["contentURI"], "ar://abc");
        assert_eq!(variables["request"]["openActionModules"], serde_json::json!([]));
        assert!(variables["request"].get("referenceModule").is_none());
        assert_eq!(variables["options"]["overrideSigNonce"], 7);
        assert_eq!(request.kind(), PublicationKind::Comment);
        assert_eq!(request.channel(), Channel::Onchain);
        assert_eq!(request.dispatch(), Dispatch::TypedData);
    }

    #[test]
    fn test_content_uri_accessor() {
        let request = PublicationRequest::QuoteOnchain(OnchainQuoteRequest {
            quote_on: "0x01-0x03".to_string(),
            payload: onchain_payload(),
        });
        assert_eq!(request.content_uri(), "ar://abc");
        assert_eq!(request.kind(), PublicationKind::Quote);
    }
}
