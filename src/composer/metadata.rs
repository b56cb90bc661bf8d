//! Metadata document assembly.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use crate::models::{
    AttachmentType, LensMetadata, MainContentFocus, Marketplace, MediaItem, MetadataAttribute,
    Profile, PublicationKind, PublicationMetadata, POLL_ID_ATTRIBUTE,
};
use crate::state::ComposerSession;

/// Public web origin used in `external_url`.
pub const HEY_URL: &str = "https://hey.xyz";

/// Animation shown by marketplaces when the publication has no media.
pub const FALLBACK_ANIMATION_URL: &str =
    "ipfs://bafkreiaoua5s4iyg4gkfjzl6mzgenw4qw7mwgxj7zf7ev7gga72o5d3lf4";

/// Builds the metadata document of a draft.
pub struct MetadataBuilder<'a> {
    session: &'a ComposerSession,
    profile: &'a Profile,
    kind: PublicationKind,
    poll_id: Option<String>,
    id: Option<String>,
    now: Option<DateTime<Utc>>,
    locale: String,
}

impl<'a> MetadataBuilder<'a> {
    pub fn new(session: &'a ComposerSession, profile: &'a Profile, kind: PublicationKind) -> Self {
        Self {
            session,
            profile,
            kind,
            poll_id: None,
            id: None,
            now: None,
            locale: "en".to_string(),
        }
    }

    pub fn poll_id(mut self, poll_id: Option<String>) -> Self {
        self.poll_id = poll_id;
        self
    }

    /// Fix the document id instead of generating a uuid.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Fix the clock used for live-stream start times.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// "<Video|Comment|Quote|Post> by <@handle>", or the audio title.
    pub fn title(&self) -> String {
        if self.session.attachments.has_audio() {
            return self.session.audio.title.clone();
        }

        let prefix = if self.session.attachments.has_video() {
            "Video"
        } else {
            self.kind.label()
        };
        format!("{} by {}", prefix, self.profile.slug_with_prefix())
    }

    pub fn animation_url(&self) -> String {
        match self.session.attachments.first() {
            Some(attachment) if !attachment.uri.is_empty() => attachment.uri.clone(),
            _ => FALLBACK_ANIMATION_URL.to_string(),
        }
    }

    fn attributes(&self) -> Option<Vec<MetadataAttribute>> {
        let mut attributes = Vec::new();
        if let Some(poll_id) = &self.poll_id {
            attributes.push(MetadataAttribute::string(POLL_ID_ATTRIBUTE, poll_id.clone()));
        }
        attributes.extend(self.session.attributes.attributes.iter().cloned());

        if attributes.is_empty() {
            None
        } else {
            Some(attributes)
        }
    }

    fn licensed(&self, mut item: MediaItem) -> MediaItem {
        item.license = self.session.license.license.clone();
        item
    }

    fn focus(&self) -> MainContentFocus {
        if self.session.live.is_live() {
            return MainContentFocus::Livestream;
        }
        match self.session.attachments.primary_kind() {
            None => MainContentFocus::TextOnly,
            Some(AttachmentType::Image) => MainContentFocus::Image,
            Some(AttachmentType::Audio) => MainContentFocus::Audio,
            Some(AttachmentType::Video) => MainContentFocus::Video,
        }
    }

    pub fn build(self) -> PublicationMetadata {
        let title = self.title();
        let content = self.session.publication.processed_content();
        let focus = self.focus();

        let mut lens = LensMetadata {
            id: self
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            locale: self.locale.clone(),
            main_content_focus: focus,
            content: content.clone(),
            title: Some(title.clone()),
            attributes: self.attributes(),
            image: None,
            audio: None,
            video: None,
            attachments: None,
            live_url: None,
            playback_url: None,
            starts_at: None,
        };

        let attachments = &self.session.attachments;
        let primary = attachments
            .first()
            .map(|a| self.licensed(MediaItem::new(&a.uri, &a.mime_type)));

        match focus {
            MainContentFocus::Livestream => {
                let url = self.session.live.playback_url();
                let now = self.now.unwrap_or_else(Utc::now);
                lens.live_url = Some(url.clone());
                lens.playback_url = Some(url);
                lens.starts_at = Some(now.to_rfc3339_opts(SecondsFormat::Millis, true));
            }
            MainContentFocus::TextOnly => {}
            MainContentFocus::Image => lens.image = primary,
            MainContentFocus::Audio => {
                lens.audio = primary.map(|mut item| {
                    item.artist = Some(self.session.audio.artist.clone());
                    item.cover = Some(self.session.audio.cover.clone());
                    item
                });
            }
            MainContentFocus::Video => {
                lens.video = primary.map(|mut item| {
                    item.cover = self.session.video_thumbnail.url.clone();
                    item
                });
            }
        }

        if !attachments.is_empty() && focus != MainContentFocus::TextOnly {
            lens.attachments = Some(
                attachments
                    .attachments
                    .iter()
                    .map(|a| self.licensed(MediaItem::new(&a.uri, &a.mime_type)))
                    .collect(),
            );
        }

        PublicationMetadata {
            schema: focus.schema_url(),
            lens,
            marketplace: Marketplace {
                name: title,
                description: content,
                external_url: format!("{}{}", HEY_URL, self.profile.link()),
                animation_url: self.animation_url(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Handle, NewAttachment, OwnedBy};
    use chrono::TimeZone;

    fn profile() -> Profile {
        Profile {
            id: "0x01".into(),
            handle: Some(Handle {
                local_name: "alice".into(),
                full_handle: None,
            }),
            owned_by: OwnedBy::default(),
            signless: true,
            sponsor: true,
        }
    }

    #[test]
    fn test_text_only_post() {
        let mut session = ComposerSession::new();
        session.set_content("hello");
        let profile = profile();

        let metadata = MetadataBuilder::new(&session, &profile, PublicationKind::Post)
            .with_id("doc-1")
            .build();

        assert_eq!(metadata.main_content_focus(), MainContentFocus::TextOnly);
        assert_eq!(metadata.lens.id, "doc-1");
        assert_eq!(metadata.lens.title.as_deref(), Some("Post by @alice"));
        assert_eq!(metadata.marketplace.external_url, "https://hey.xyz/u/alice");
        assert_eq!(metadata.marketplace.animation_url, FALLBACK_ANIMATION_URL);
        assert_eq!(metadata.marketplace.description.as_deref(), Some("hello"));
        assert!(metadata.lens.attributes.is_none());
        assert!(metadata.lens.attachments.is_none());
    }

    #[test]
    fn test_poll_id_attribute() {
        let mut session = ComposerSession::new();
        session.set_content("vote");
        let profile = profile();

        let metadata = MetadataBuilder::new(&session, &profile, PublicationKind::Comment)
            .poll_id(Some("poll-9".into()))
            .build();

        assert_eq!(metadata.poll_id(), Some("poll-9"));
        assert_eq!(metadata.lens.title.as_deref(), Some("Comment by @alice"));
    }

    #[test]
    fn test_video_title_and_cover() {
        let mut session = ComposerSession::new();
        session.attachments.add_attachments([NewAttachment::new(
            AttachmentType::Video,
            "ipfs://video",
            "video/mp4",
        )]);
        session.video_thumbnail.url = Some("ipfs://thumb".into());
        session.license.license = Some("CC0".into());
        let profile = profile();

        let metadata = MetadataBuilder::new(&session, &profile, PublicationKind::Quote).build();

        assert_eq!(metadata.lens.title.as_deref(), Some("Video by @alice"));
        let video = metadata.lens.video.clone().unwrap();
        assert_eq!(video.cover.as_deref(), Some("ipfs://thumb"));
        assert_eq!(video.license.as_deref(), Some("CC0"));
        assert_eq!(metadata.marketplace.animation_url, "ipfs://video");
        assert!(metadata.marketplace.description.is_none());
        assert_eq!(metadata.lens.attachments.as_ref().map(|a| a.len()), Some(1));
    }

    #[test]
    fn test_audio_uses_audio_title() {
        let mut session = ComposerSession::new();
        session.attachments.add_attachments([NewAttachment::new(
            AttachmentType::Audio,
            "ipfs://song",
            "audio/mpeg",
        )]);
        session.audio.title = "Song".into();
        session.audio.artist = "Band".into();
        session.audio.cover = "ipfs://cover".into();
        let profile = profile();

        let metadata = MetadataBuilder::new(&session, &profile, PublicationKind::Post).build();

        assert_eq!(metadata.lens.title.as_deref(), Some("Song"));
        assert_eq!(metadata.marketplace.name, "Song");
        let audio = metadata.lens.audio.unwrap();
        assert_eq!(audio.artist.as_deref(), Some("Band"));
        assert_eq!(audio.cover.as_deref(), Some("ipfs://cover"));
    }

    #[test]
    fn test_livestream_takes_precedence() {
        let mut session = ComposerSession::new();
        session.set_content("live now");
        session.live.show_live_video_editor = true;
        session.live.live_video_config.id = "stream-1".into();
        session.live.live_video_config.playback_id = "pb".into();
        let profile = profile();
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

        let metadata = MetadataBuilder::new(&session, &profile, PublicationKind::Post)
            .with_now(now)
            .build();

        assert_eq!(metadata.main_content_focus(), MainContentFocus::Livestream);
        assert_eq!(
            metadata.lens.live_url.as_deref(),
            Some("https://livepeercdn.studio/hls/pb/index.m3u8")
        );
        assert_eq!(metadata.lens.starts_at.as_deref(), Some("2024-01-02T03:04:05.000Z"));
    }

    #[test]
    fn test_profile_without_handle() {
        let mut session = ComposerSession::new();
        session.set_content("gm");
        let profile = Profile {
            handle: None,
            ..profile()
        };
        let metadata = MetadataBuilder::new(&session, &profile, PublicationKind::Post).build();
        assert_eq!(metadata.lens.title.as_deref(), Some("Post by #0x01"));
        assert_eq!(metadata.marketplace.external_url, "https://hey.xyz/profile/0x01");
    }
}
