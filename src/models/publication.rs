//! Publications the composer can target and the attachments it carries.

use serde::{Deserialize, Serialize};

/// Momoka (relay) data of a publication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MomokaInfo {
    pub proof: String,
}

/// An existing publication referenced by a comment or quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublicationRef {
    pub id: String,
    #[serde(default)]
    pub momoka: Option<MomokaInfo>,
}

impl PublicationRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            momoka: None,
        }
    }

    /// Mark this publication as relayed through Momoka.
    pub fn with_momoka_proof(mut self, proof: impl Into<String>) -> Self {
        self.momoka = Some(MomokaInfo {
            proof: proof.into(),
        });
        self
    }

    pub fn has_momoka_proof(&self) -> bool {
        self.momoka
            .as_ref()
            .map(|m| !m.proof.is_empty())
            .unwrap_or(false)
    }
}

/// What a new publication is in relation to existing ones.
#[derive(Debug, Clone, PartialEq)]
pub enum PublicationTarget {
    Post,
    Comment(PublicationRef),
    Quote(PublicationRef),
}

impl PublicationTarget {
    /// Resolve the target from the two optional references. A comment
    /// target takes precedence over a quoted publication.
    pub fn resolve(comment_on: Option<&PublicationRef>, quote_on: Option<&PublicationRef>) -> Self {
        match (comment_on, quote_on) {
            (Some(target), _) => PublicationTarget::Comment(target.clone()),
            (None, Some(quoted)) => PublicationTarget::Quote(quoted.clone()),
            (None, None) => PublicationTarget::Post,
        }
    }

    pub fn kind(&self) -> PublicationKind {
        match self {
            PublicationTarget::Post => PublicationKind::Post,
            PublicationTarget::Comment(_) => PublicationKind::Comment,
            PublicationTarget::Quote(_) => PublicationKind::Quote,
        }
    }

    /// Relay eligibility: comments and quotes follow their target's proof,
    /// posts are relayable only without a collect module.
    pub fn is_relay_eligible(&self, has_collect_module: bool) -> bool {
        match self {
            PublicationTarget::Comment(target) => target.has_momoka_proof(),
            PublicationTarget::Quote(quoted) => quoted.has_momoka_proof(),
            PublicationTarget::Post => !has_collect_module,
        }
    }
}

/// Closed set of publication kinds the composer can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicationKind {
    Post,
    Comment,
    Quote,
}

impl PublicationKind {
    pub fn label(&self) -> &'static str {
        match self {
            PublicationKind::Post => "Post",
            PublicationKind::Comment => "Comment",
            PublicationKind::Quote => "Quote",
        }
    }
}

/// Media type of an attachment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttachmentType {
    Image,
    Video,
    Audio,
}

/// An attachment added to the draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAttachment {
    #[serde(rename = "type")]
    pub kind: AttachmentType,
    pub uri: String,
    pub mime_type: String,
    #[serde(default)]
    pub preview_uri: String,
}

impl NewAttachment {
    pub fn new(kind: AttachmentType, uri: impl Into<String>, mime_type: impl Into<String>) -> Self {
        let uri = uri.into();
        Self {
            kind,
            preview_uri: uri.clone(),
            uri,
            mime_type: mime_type.into(),
        }
    }

    /// A GIF picked from the GIF panel.
    pub fn gif(url: impl Into<String>) -> Self {
        Self::new(AttachmentType::Image, url, "image/gif")
    }
}
