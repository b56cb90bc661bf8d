//! Attachments of the draft.

use crate::models::{AttachmentType, NewAttachment};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttachmentStore {
    pub attachments: Vec<NewAttachment>,
    /// An upload is still in progress; submission stays disabled
    pub is_uploading: bool,
}

impl AttachmentStore {
    pub fn add_attachments(&mut self, attachments: impl IntoIterator<Item = NewAttachment>) {
        self.attachments.extend(attachments);
    }

    pub fn set_attachments(&mut self, attachments: Vec<NewAttachment>) {
        self.attachments = attachments;
    }

    pub fn remove_attachment(&mut self, uri: &str) {
        self.attachments.retain(|a| a.uri != uri);
    }

    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.attachments.len()
    }

    pub fn first(&self) -> Option<&NewAttachment> {
        self.attachments.first()
    }

    /// Media kind of the publication, decided by the first attachment.
    pub fn primary_kind(&self) -> Option<AttachmentType> {
        self.first().map(|a| a.kind)
    }

    pub fn has_audio(&self) -> bool {
        self.primary_kind() == Some(AttachmentType::Audio)
    }

    pub fn has_video(&self) -> bool {
        self.primary_kind() == Some(AttachmentType::Video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_kind_follows_first_attachment() {
        let mut store = AttachmentStore::default();
        assert!(store.primary_kind().is_none());

        store.add_attachments(vec![
            NewAttachment::new(AttachmentType::Audio, "ipfs://song", "audio/mpeg"),
            NewAttachment::new(AttachmentType::Image, "ipfs://img", "image/png"),
        ]);
        assert!(store.has_audio());
        assert!(!store.has_video());

        store.remove_attachment("ipfs://song");
        assert_eq!(store.primary_kind(), Some(AttachmentType::Image));
        assert_eq!(store.len(), 1);
    }
}
