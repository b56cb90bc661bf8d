//! Client-side state.
//!
//! - [`composer`]: per-draft stores owned by one composer session
//! - [`ModalState`]: modal visibility around the composer
//! - [`NonceStore`]: shared replay-protection nonce

pub mod composer;
pub mod modal;
pub mod nonce;

pub use composer::ComposerSession;
pub use modal::ModalState;
pub use nonce::NonceStore;
