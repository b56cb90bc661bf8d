//! Common fixtures for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{alice, Harness};
//!
//! let h = Harness::new();
//! let composer = h.composer();
//! ```

pub mod mocks;

pub use mocks::*;

use hey::models::{Handle, OwnedBy, Profile};

/// Profile with the lens manager enabled and sponsored.
pub fn alice() -> Profile {
    Profile {
        id: "0x01".to_string(),
        handle: Some(Handle {
            local_name: "alice".to_string(),
            full_handle: Some("lens/alice".to_string()),
        }),
        owned_by: OwnedBy {
            address: "0x00000000000000000000000000000000000a11ce".to_string(),
        },
        signless: true,
        sponsor: true,
    }
}

/// Profile that has to sign typed data for every publication.
#[allow(dead_code)]
pub fn signing_profile() -> Profile {
    Profile {
        signless: false,
        ..alice()
    }
}

/// Profile without a handle or owner address.
#[allow(dead_code)]
pub fn bare_profile() -> Profile {
    Profile {
        id: "0x2a".to_string(),
        handle: None,
        owned_by: OwnedBy::default(),
        signless: false,
        sponsor: false,
    }
}
