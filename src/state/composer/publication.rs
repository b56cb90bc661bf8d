//! Text content, tags and quoted publication of the draft.

use crate::models::PublicationRef;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicationStore {
    pub content: String,
    pub quoted_publication: Option<PublicationRef>,
    pub tags: Option<Vec<String>>,
}

impl PublicationStore {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Content as it goes into metadata: `None` when empty.
    pub fn processed_content(&self) -> Option<String> {
        if self.content.is_empty() {
            None
        } else {
            Some(self.content.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processed_content() {
        let mut store = PublicationStore::default();
        assert!(store.processed_content().is_none());
        store.content = "gm".to_string();
        assert_eq!(store.processed_content().as_deref(), Some("gm"));
    }
}
