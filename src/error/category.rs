//! Error category classification.
//!
//! Categories drive where a failure is shown to the user and whether a
//! manual resubmission can be expected to succeed. Nothing in the client
//! retries automatically.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Transport or chain failures (connection, timeout, GraphQL errors).
    Network,

    /// No signed-in profile, or the account cannot act.
    Auth,

    /// The relay answered with a rejection result kind.
    Relay,

    /// User input does not pass validation.
    Validation,

    /// Invalid client state (a programming error or a refused re-entry).
    Client,

    /// Missing or malformed configuration.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if resubmitting the same draft later may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Relay)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Relay => "relay",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Client => "client",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your connection and submit again",
            ErrorCategory::Auth => "Sign in with your wallet and try again",
            ErrorCategory::Relay => "The relay refused the publication. Submit again later",
            ErrorCategory::Validation => "Fix the highlighted field and submit again",
            ErrorCategory::Client => "Wait for the current action to finish",
            ErrorCategory::Configuration => "Check your configuration settings",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
