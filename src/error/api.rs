//! Errors of the GraphQL API client.

use thiserror::Error;

use crate::traits::HttpError;

/// Error returned by [`crate::traits::LensApi`] implementations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The HTTP exchange itself failed
    #[error("{0}")]
    Http(#[from] HttpError),

    /// The API answered with GraphQL `errors`
    #[error("{operation} failed: {}", messages.join("; "))]
    GraphQl {
        operation: String,
        messages: Vec<String>,
    },

    /// The response did not match the expected shape
    #[error("Unexpected {operation} response: {message}")]
    Decode { operation: String, message: String },

    /// The API returned neither data nor errors
    #[error("{operation} returned no data")]
    MissingData { operation: String },
}

impl ApiError {
    pub fn decode(operation: &str, err: impl std::fmt::Display) -> Self {
        ApiError::Decode {
            operation: operation.to_string(),
            message: err.to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Http(_) => "E_API_HTTP",
            ApiError::GraphQl { .. } => "E_API_GRAPHQL",
            ApiError::Decode { .. } => "E_API_DECODE",
            ApiError::MissingData { .. } => "E_API_NO_DATA",
        }
    }
}
