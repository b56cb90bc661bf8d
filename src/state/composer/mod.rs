//! Per-draft state of one composer session.
//!
//! Every piece of draft state lives in a typed store owned by
//! [`ComposerSession`]. Subordinate views receive the session by reference
//! instead of reaching for process-wide stores.

pub mod attachments;
pub mod attributes;
pub mod audio;
pub mod collect;
pub mod license;
pub mod live;
pub mod poll;
pub mod publication;
pub mod reference;
pub mod video;

pub use attachments::AttachmentStore;
pub use attributes::AttributesStore;
pub use audio::{AudioPublication, SchemaIssue};
pub use collect::CollectModuleStore;
pub use license::LicenseStore;
pub use live::{LiveStore, LiveVideoConfig};
pub use poll::{PollConfig, PollStore};
pub use publication::PublicationStore;
pub use reference::ReferenceModuleStore;
pub use video::VideoThumbnail;

use crate::composer::mentions::count_mentions;
use crate::models::{NewAttachment, OpenActionModuleInput};

/// Maximum number of mentions in one publication.
pub const MAX_MENTIONS: usize = 50;

pub const MENTIONS_LIMIT_MESSAGE: &str = "You can only mention 50 people at a time!";

/// All draft stores plus the composer's own view state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposerSession {
    pub publication: PublicationStore,
    pub attachments: AttachmentStore,
    pub poll: PollStore,
    pub audio: AudioPublication,
    pub video_thumbnail: VideoThumbnail,
    pub live: LiveStore,
    pub license: LicenseStore,
    pub attributes: AttributesStore,
    pub collect: CollectModuleStore,
    pub reference: ReferenceModuleStore,

    /// Open action produced by an NFT link preview
    pub nft_open_action_embed: Option<OpenActionModuleInput>,
    /// Field-level error shown under the editor
    pub content_error: Option<String>,
    pub exceeded_mentions_limit: bool,
    pub show_emoji_picker: bool,
}

impl ComposerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the editor content and re-check the mention limit.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.publication.content = content.into();

        if count_mentions(&self.publication.content) > MAX_MENTIONS {
            self.exceeded_mentions_limit = true;
            self.content_error = Some(MENTIONS_LIMIT_MESSAGE.to_string());
        } else {
            self.exceeded_mentions_limit = false;
            self.content_error = None;
        }
    }

    /// Replace the audio metadata; any field error is stale afterwards.
    pub fn set_audio(&mut self, audio: AudioPublication) {
        self.audio = audio;
        self.content_error = None;
    }

    pub fn add_gif(&mut self, url: impl Into<String>) {
        self.attachments.add_attachments([NewAttachment::gif(url)]);
    }

    /// Why the draft cannot be submitted right now, if anything stops it.
    pub fn submit_blocker(&self) -> Option<&'static str> {
        if self.attachments.is_uploading {
            Some("Attachments are still uploading.")
        } else if self.video_thumbnail.uploading {
            Some("Video thumbnail is still uploading.")
        } else if self.poll.blocks_submit() {
            Some("Poll is incomplete.")
        } else if self.exceeded_mentions_limit {
            Some(MENTIONS_LIMIT_MESSAGE)
        } else {
            None
        }
    }

    /// Clear every per-draft store. Idempotent.
    pub fn reset(&mut self) {
        self.set_content("");
        self.publication.tags = None;
        self.poll.show_poll_editor = false;
        self.poll.reset_poll_config();
        self.live.show_live_video_editor = false;
        self.live.reset_live_video_config();
        self.attachments.set_attachments(Vec::new());
        self.video_thumbnail = VideoThumbnail::default();
        self.audio = AudioPublication::default();
        self.license.license = None;
        self.attributes.reset();
        self.collect.reset();
    }

    /// Every store touched by [`ComposerSession::reset`] holds its default.
    pub fn is_reset(&self) -> bool {
        self.publication.content.is_empty()
            && self.content_error.is_none()
            && !self.exceeded_mentions_limit
            && self.publication.tags.is_none()
            && self.poll == PollStore::default()
            && self.live == LiveStore::default()
            && self.attachments.is_empty()
            && self.video_thumbnail == VideoThumbnail::default()
            && self.audio == AudioPublication::default()
            && self.license == LicenseStore::default()
            && self.attributes == AttributesStore::default()
            && self.collect == CollectModuleStore::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttachmentType, CollectModuleType, MetadataAttribute};

    fn dirty_session() -> ComposerSession {
        let mut session = ComposerSession::new();
        session.set_content("gm @lens/alice");
        session.publication.tags = Some(vec!["gm".into()]);
        session.poll.show_poll_editor = true;
        session.poll.poll_config.options = vec!["a".into()];
        session.live.show_live_video_editor = true;
        session.live.live_video_config.id = "stream".into();
        session.attachments.add_attachments([NewAttachment::new(
            AttachmentType::Video,
            "ipfs://video",
            "video/mp4",
        )]);
        session.video_thumbnail.url = Some("ipfs://thumb".into());
        session.audio.title = "Song".into();
        session.license.license = Some("CC0".into());
        session.attributes.upsert(MetadataAttribute::string("k", "v"));
        session
            .collect
            .set_type(Some(CollectModuleType::SimpleCollectOpenActionModule));
        session
    }

    #[test]
    fn test_reset_restores_defaults_and_is_idempotent() {
        let mut session = dirty_session();
        assert!(!session.is_reset());

        session.reset();
        assert!(session.is_reset());
        let once = session.clone();
        session.reset();
        assert_eq!(session, once);
    }

    #[test]
    fn test_reset_keeps_reference_settings_and_quote() {
        let mut session = dirty_session();
        session.reference.only_followers = true;
        session.publication.quoted_publication =
            Some(crate::models::PublicationRef::new("0x01-0x01"));
        session.reset();
        assert!(session.reference.only_followers);
        assert!(session.publication.quoted_publication.is_some());
    }

    #[test]
    fn test_mention_limit() {
        let mut session = ComposerSession::new();
        let many: Vec<String> = (0..51).map(|i| format!("@user{}", i)).collect();
        session.set_content(many.join(" "));
        assert!(session.exceeded_mentions_limit);
        assert_eq!(session.content_error.as_deref(), Some(MENTIONS_LIMIT_MESSAGE));

        session.set_content("just one @user0");
        assert!(!session.exceeded_mentions_limit);
        assert!(session.content_error.is_none());
    }

    #[test]
    fn test_reset_clears_mention_limit() {
        let mut session = ComposerSession::new();
        let many: Vec<String> = (0..51).map(|i| format!("@user{}", i)).collect();
        session.set_content(many.join(" "));
        assert!(!session.is_reset());

        session.reset();
        assert!(!session.exceeded_mentions_limit);
        assert!(session.content_error.is_none());
        assert!(session.is_reset());
    }

    #[test]
    fn test_submit_blockers() {
        let mut session = ComposerSession::new();
        assert_eq!(session.submit_blocker(), None);

        session.attachments.is_uploading = true;
        assert_eq!(session.submit_blocker(), Some("Attachments are still uploading."));
        session.attachments.is_uploading = false;

        session.video_thumbnail.uploading = true;
        assert_eq!(session.submit_blocker(), Some("Video thumbnail is still uploading."));
        session.video_thumbnail.uploading = false;

        session.poll.show_poll_editor = true;
        assert_eq!(session.submit_blocker(), Some("Poll is incomplete."));
        session.poll.show_poll_editor = false;

        let many: Vec<String> = (0..51).map(|i| format!("@user{}", i)).collect();
        session.set_content(many.join(" "));
        assert_eq!(session.submit_blocker(), Some(MENTIONS_LIMIT_MESSAGE));
    }

    #[test]
    fn test_audio_change_clears_error() {
        let mut session = ComposerSession::new();
        session.content_error = Some("Invalid audio title".into());
        session.set_audio(AudioPublication {
            title: "Song".into(),
            ..Default::default()
        });
        assert!(session.content_error.is_none());
    }

    #[test]
    fn test_add_gif() {
        let mut session = ComposerSession::new();
        session.add_gif("https://media.giphy.com/x.gif");
        assert_eq!(session.attachments.len(), 1);
        assert_eq!(
            session.attachments.first().map(|a| a.mime_type.as_str()),
            Some("image/gif")
        );
    }
}
