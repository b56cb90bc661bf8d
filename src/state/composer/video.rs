//! Video thumbnail of the draft.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoThumbnail {
    pub url: Option<String>,
    pub mime_type: String,
    pub uploading: bool,
}
