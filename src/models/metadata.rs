//! Lens publication metadata (v3) as uploaded to the content store.

use serde::{Deserialize, Serialize};

const SCHEMA_BASE: &str = "https://json-schemas.lens.dev/publications";

/// Attribute key carrying the poll id of a publication.
pub const POLL_ID_ATTRIBUTE: &str = "pollId";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MainContentFocus {
    TextOnly,
    Image,
    Audio,
    Video,
    Livestream,
}

impl MainContentFocus {
    pub fn schema_url(&self) -> String {
        let name = match self {
            MainContentFocus::TextOnly => "text-only",
            MainContentFocus::Image => "image",
            MainContentFocus::Audio => "audio",
            MainContentFocus::Video => "video",
            MainContentFocus::Livestream => "livestream",
        };
        format!("{}/{}/3.0.0.json", SCHEMA_BASE, name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MetadataAttributeType {
    String,
    Number,
    Boolean,
    Date,
    #[serde(rename = "JSON")]
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetadataAttribute {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: MetadataAttributeType,
    pub value: String,
}

impl MetadataAttribute {
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: MetadataAttributeType::String,
            value: value.into(),
        }
    }
}

/// Marketplace (OpenSea-style) fields, stored at the document root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Marketplace {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub external_url: String,
    pub animation_url: String,
}

/// A media item inside the `lens` block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaItem {
    pub item: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

impl MediaItem {
    pub fn new(item: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            mime_type: mime_type.into(),
            license: None,
            artist: None,
            cover: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LensMetadata {
    pub id: String,
    pub locale: String,
    pub main_content_focus: MainContentFocus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<MetadataAttribute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<MediaItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<MediaItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<MediaItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<MediaItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<String>,
}

/// The full metadata document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublicationMetadata {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub lens: LensMetadata,
    #[serde(flatten)]
    pub marketplace: Marketplace,
}

impl PublicationMetadata {
    pub fn main_content_focus(&self) -> MainContentFocus {
        self.lens.main_content_focus
    }

    pub fn poll_id(&self) -> Option<&str> {
        self.lens
            .attributes
            .as_ref()?
            .iter()
            .find(|a| a.key == POLL_ID_ATTRIBUTE)
            .map(|a| a.value.as_str())
    }
}
