//! Lens profile as seen by the client.

use serde::{Deserialize, Serialize};

/// A Lens handle (`lens/alice`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Handle {
    pub local_name: String,
    #[serde(default)]
    pub full_handle: Option<String>,
}

/// On-chain owner of a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OwnedBy {
    pub address: String,
}

/// The signed-in (or viewed) profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub handle: Option<Handle>,
    #[serde(default)]
    pub owned_by: OwnedBy,
    /// Lens manager (signless) is enabled for this profile
    #[serde(default)]
    pub signless: bool,
    /// Gas for this profile is sponsored by the API
    #[serde(default)]
    pub sponsor: bool,
}

impl Profile {
    /// Handle local name when present, profile id otherwise.
    pub fn slug(&self) -> &str {
        match &self.handle {
            Some(handle) => &handle.local_name,
            None => &self.id,
        }
    }

    /// `@alice` for handles, `#0x01` for bare profile ids.
    pub fn slug_with_prefix(&self) -> String {
        match &self.handle {
            Some(handle) => format!("@{}", handle.local_name),
            None => format!("#{}", self.id),
        }
    }

    /// Relative link to the profile page.
    pub fn link(&self) -> String {
        match &self.handle {
            Some(handle) => format!("/u/{}", handle.local_name),
            None => format!("/profile/{}", self.id),
        }
    }

    /// Whether actions can be dispatched by the lens manager without a
    /// fresh signature.
    pub fn can_use_lens_manager(&self) -> bool {
        self.signless && self.sponsor
    }
}

/// Status flags of the signed-in account that are not part of [`Profile`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileStatus {
    pub is_suspended: bool,
    pub is_pro: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Profile {
        Profile {
            id: "0x01".to_string(),
            handle: Some(Handle {
                local_name: "alice".to_string(),
                full_handle: Some("lens/alice".to_string()),
            }),
            owned_by: OwnedBy {
                address: "0xabc".to_string(),
            },
            signless: true,
            sponsor: true,
        }
    }

    #[test]
    fn test_slug_with_handle() {
        let profile = alice();
        assert_eq!(profile.slug(), "alice");
        assert_eq!(profile.slug_with_prefix(), "@alice");
        assert_eq!(profile.link(), "/u/alice");
    }

    #[test]
    fn test_slug_without_handle() {
        let profile = Profile {
            handle: None,
            ..alice()
        };
        assert_eq!(profile.slug(), "0x01");
        assert_eq!(profile.slug_with_prefix(), "#0x01");
        assert_eq!(profile.link(), "/profile/0x01");
    }

    #[test]
    fn test_lens_manager_requires_signless_and_sponsor() {
        assert!(alice().can_use_lens_manager());
        assert!(!Profile {
            sponsor: false,
            ..alice()
        }
        .can_use_lens_manager());
        assert!(!Profile {
            signless: false,
            ..alice()
        }
        .can_use_lens_manager());
    }

    #[test]
    fn test_deserialize_graphql_shape() {
        let json = r#"{
            "id": "0x05",
            "handle": {"localName": "bob", "fullHandle": "lens/bob"},
            "ownedBy": {"address": "0xdef"},
            "signless": false,
            "sponsor": true
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.slug(), "bob");
        assert_eq!(profile.owned_by.address, "0xdef");
        assert!(!profile.can_use_lens_manager());
    }
}
