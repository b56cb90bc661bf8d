//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`LensClient`] - Lens GraphQL API
//! - [`ArweaveUploader`] - metadata upload through the hey metadata service
//! - [`MemoryUploader`] - in-memory content-addressed store
//! - [`HeyPollService`] - poll creation
//! - [`LeafwatchAnalytics`] - fire-and-forget event delivery
//! - [`NoWalletSigner`] - refuses typed-data signatures
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for all traits.

pub mod arweave;
pub mod hey_polls;
pub mod leafwatch;
pub mod lens_graphql;
pub mod memory_upload;
pub mod mock;
pub mod reqwest_http;
pub mod wallet;

pub use arweave::ArweaveUploader;
pub use hey_polls::HeyPollService;
pub use leafwatch::LeafwatchAnalytics;
pub use lens_graphql::LensClient;
pub use memory_upload::MemoryUploader;
pub use reqwest_http::ReqwestHttpClient;
pub use wallet::NoWalletSigner;
