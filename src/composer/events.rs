//! Analytics payload emitted after a successful submission.

use serde::Serialize;

use crate::models::{PublicationKind, PublicationTarget, ReferenceModuleType};
use crate::state::ComposerSession;
use crate::tracking::publication::{NEW_COMMENT, NEW_POST, NEW_QUOTE};

pub fn event_name(kind: PublicationKind) -> &'static str {
    match kind {
        PublicationKind::Post => NEW_POST,
        PublicationKind::Comment => NEW_COMMENT,
        PublicationKind::Quote => NEW_QUOTE,
    }
}

/// Properties of a new-publication event. Absent values serialize as null.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PublicationEvent {
    pub comment_on: Option<String>,
    pub publication_collect_module: Option<&'static str>,
    pub publication_has_attachments: bool,
    pub publication_has_poll: bool,
    pub publication_is_live: bool,
    pub publication_reference_module: &'static str,
    pub publication_reference_module_degrees_of_separation: Option<u8>,
    pub quote_on: Option<String>,
}

impl PublicationEvent {
    /// Capture the properties from the draft as it was submitted.
    pub fn capture(session: &ComposerSession, target: &PublicationTarget) -> Self {
        let reference = &session.reference;
        let (comment_on, quote_on) = match target {
            PublicationTarget::Post => (None, None),
            PublicationTarget::Comment(target) => (Some(target.id.clone()), None),
            PublicationTarget::Quote(quoted) => (None, Some(quoted.id.clone())),
        };

        Self {
            comment_on,
            publication_collect_module: session.collect.collect_module.kind.map(|k| k.as_str()),
            publication_has_attachments: !session.attachments.is_empty(),
            publication_has_poll: session.poll.show_poll_editor,
            publication_is_live: session.live.show_live_video_editor,
            publication_reference_module: reference.selected_reference_module.as_str(),
            publication_reference_module_degrees_of_separation: match reference
                .selected_reference_module
            {
                ReferenceModuleType::DegreesOfSeparationReferenceModule => {
                    Some(reference.degrees_of_separation)
                }
                ReferenceModuleType::FollowerOnlyReferenceModule => None,
            },
            quote_on,
        }
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
