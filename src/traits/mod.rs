//! Trait abstractions for the client's external collaborators.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP transport (GET, POST)
//! - [`LensApi`] - Lens GraphQL queries and mutations
//! - [`MetadataUploader`] - content-addressed metadata store
//! - [`PollService`] - poll creation
//! - [`TypedDataSigner`] - wallet signing of typed data
//! - [`AnalyticsSink`] - fire-and-forget event tracking

pub mod analytics;
pub mod http;
pub mod lens;
pub mod poll;
pub mod signer;
pub mod upload;

pub use analytics::AnalyticsSink;
pub use http::{json_headers, Headers, HttpClient, HttpError, Response};
pub use lens::LensApi;
pub use poll::{PollError, PollService};
pub use signer::{SignerError, TypedDataSigner};
pub use upload::{arweave_uri, MetadataUploader, UploadError};
