//! Custom metadata attributes of the draft.

use crate::models::MetadataAttribute;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributesStore {
    pub attributes: Vec<MetadataAttribute>,
}

impl AttributesStore {
    /// Insert or replace the attribute with the same key.
    pub fn upsert(&mut self, attribute: MetadataAttribute) {
        match self.attributes.iter_mut().find(|a| a.key == attribute.key) {
            Some(existing) => *existing = attribute,
            None => self.attributes.push(attribute),
        }
    }

    pub fn reset(&mut self) {
        self.attributes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_replaces_same_key() {
        let mut store = AttributesStore::default();
        store.upsert(MetadataAttribute::string("app", "hey"));
        store.upsert(MetadataAttribute::string("app", "orb"));
        assert_eq!(store.attributes.len(), 1);
        assert_eq!(store.attributes[0].value, "orb");
    }
}
