//! Draft validation run before anything touches the network.

use crate::error::ComposerError;
use crate::models::PublicationKind;
use crate::state::ComposerSession;

/// Validate the draft; the first failing rule wins.
///
/// 1. With an audio attachment, the audio metadata must pass its schema.
/// 2. Content and attachments cannot both be empty.
pub fn validate_draft(
    session: &ComposerSession,
    kind: PublicationKind,
) -> Result<(), ComposerError> {
    if session.attachments.has_audio() {
        if let Err(issues) = session.audio.validate() {
            if let Some(issue) = issues.first() {
                return Err(ComposerError::validation(issue.message));
            }
        }
    }

    if session.publication.is_empty() && session.attachments.is_empty() {
        return Err(ComposerError::validation(empty_message(kind)));
    }

    Ok(())
}

pub fn empty_message(kind: PublicationKind) -> String {
    format!("{} should not be empty!", kind.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttachmentType, NewAttachment};
    use crate::state::composer::AudioPublication;

    fn audio_attachment() -> NewAttachment {
        NewAttachment::new(AttachmentType::Audio, "ipfs://song", "audio/mpeg")
    }

    #[test]
    fn test_empty_draft_message_per_kind() {
        let session = ComposerSession::new();
        for (kind, expected) in [
            (PublicationKind::Post, "Post should not be empty!"),
            (PublicationKind::Comment, "Comment should not be empty!"),
            (PublicationKind::Quote, "Quote should not be empty!"),
        ] {
            let err = validate_draft(&session, kind).unwrap_err();
            assert_eq!(err.user_message(), expected);
        }
    }

    #[test]
    fn test_attachment_only_draft_is_valid() {
        let mut session = ComposerSession::new();
        session.attachments.add_attachments([NewAttachment::gif("https://g.gif")]);
        assert!(validate_draft(&session, PublicationKind::Post).is_ok());
    }

    #[test]
    fn test_audio_schema_runs_before_empty_check() {
        let mut session = ComposerSession::new();
        session.attachments.add_attachments([audio_attachment()]);
        session.audio = AudioPublication {
            title: "Song".into(),
            ..Default::default()
        };
        let err = validate_draft(&session, PublicationKind::Post).unwrap_err();
        assert_eq!(err.user_message(), "Invalid artist name");
    }

    #[test]
    fn test_audio_schema_ignored_without_audio_attachment() {
        let mut session = ComposerSession::new();
        session.set_content("hello");
        assert!(validate_draft(&session, PublicationKind::Post).is_ok());
    }
}
