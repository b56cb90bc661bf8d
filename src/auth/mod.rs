//! Lens session storage.
//!
//! The access token (a JWT) authenticates GraphQL and hey API calls; the
//! profile id selects the signed-in profile.

pub mod credentials;

pub use credentials::{token_expires_at, Credentials, CredentialsManager};
