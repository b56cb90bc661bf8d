//! hey - a Lens Protocol client
//!
//! Composes posts, comments and quotes and pages through a profile's NFTs.
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod auth;
pub mod cli;
pub mod composer;
pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod state;
pub mod tracking;
pub mod traits;
