//! Client configuration.
//!
//! Defaults point at the production services. Every field can be
//! overridden from the environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `HEY_LENS_API_URL` | `lens_api_url` |
//! | `HEY_API_URL` | `hey_api_url` |
//! | `HEY_METADATA_URL` | `metadata_url` |
//! | `HEY_TESTNET` | `is_mainnet` (set to `1`/`true` for testnet) |
//! | `HEY_PAGE_SIZE` | `page_size` |

use std::time::Duration;

use thiserror::Error;

use crate::error::ErrorCategory;

pub const LENS_API_URL: &str = "https://api-v2.lens.dev";
pub const HEY_API_URL: &str = "https://api.hey.xyz";
pub const METADATA_URL: &str = "https://metadata.hey.xyz";

/// Items per feed page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must be an http(s) URL, got {value:?}")]
    InvalidUrl { name: &'static str, value: String },
}

impl ConfigError {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}

/// Endpoints and knobs of the client.
///
/// # Example
///
/// ```ignore
/// use hey::config::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_testnet(true)
///     .with_page_size(20);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub lens_api_url: String,
    pub hey_api_url: String,
    pub metadata_url: String,
    pub is_mainnet: bool,
    pub page_size: u32,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            lens_api_url: LENS_API_URL.to_string(),
            hey_api_url: HEY_API_URL.to_string(),
            metadata_url: METADATA_URL.to_string(),
            is_mainnet: true,
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lens_api_url(mut self, url: impl Into<String>) -> Self {
        self.lens_api_url = url.into();
        self
    }

    pub fn with_hey_api_url(mut self, url: impl Into<String>) -> Self {
        self.hey_api_url = url.into();
        self
    }

    pub fn with_metadata_url(mut self, url: impl Into<String>) -> Self {
        self.metadata_url = url.into();
        self
    }

    pub fn with_testnet(mut self, testnet: bool) -> Self {
        self.is_mainnet = !testnet;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Defaults overridden by `HEY_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("HEY_LENS_API_URL") {
            config.lens_api_url = parse_url("HEY_LENS_API_URL", url)?;
        }
        if let Some(url) = lookup("HEY_API_URL") {
            config.hey_api_url = parse_url("HEY_API_URL", url)?;
        }
        if let Some(url) = lookup("HEY_METADATA_URL") {
            config.metadata_url = parse_url("HEY_METADATA_URL", url)?;
        }
        if let Some(flag) = lookup("HEY_TESTNET") {
            config.is_mainnet = !matches!(flag.trim(), "1" | "true" | "TRUE" | "yes");
        }
        if let Some(value) = lookup("HEY_PAGE_SIZE") {
            config.page_size = match value.trim().parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        name: "HEY_PAGE_SIZE",
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}

fn parse_url(name: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidUrl { name, value })
    }
}
