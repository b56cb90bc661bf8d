//! Mock implementations for testing.
//!
//! Test doubles for every trait in `crate::traits`, usable without network
//! access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockLensApi`] - Lens API recording calls, healthy by default
//! - [`MemoryUploader`] - content-addressed in-memory metadata store
//! - [`StaticPollService`], [`StaticSigner`] - fixed results
//! - [`RecordingAnalytics`] - keeps tracked events

pub mod http;
pub mod lens;
pub mod services;

pub use super::memory_upload::MemoryUploader;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use lens::{LensCall, MockLensApi};
pub use services::{RecordingAnalytics, StaticPollService, StaticSigner};
