//! Errors surfaced by a publication submission attempt.

use std::fmt;

use super::api::ApiError;
use super::category::ErrorCategory;
use crate::traits::{PollError, SignerError, UploadError};

pub const SIGN_WALLET: &str = "Please sign in your wallet.";
pub const SUSPENDED: &str = "Your account has been suspended!";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong!";
pub const TRANSACTION_FAILED: &str = "Transaction failed!";

/// Where the composer shows an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Inline, under the editor
    Field,
    /// Transient toast
    Toast,
    /// Toast plus the "Transaction failed!" banner
    Banner,
}

/// Why a submission attempt ended without creating a publication.
#[derive(Debug, Clone, PartialEq)]
pub enum ComposerError {
    /// No signed-in profile.
    AuthRequired,

    /// The signed-in account is suspended.
    AccountSuspended,

    /// A draft field failed validation; `message` is shown verbatim.
    ValidationFailed { message: String },

    /// The relay answered with a rejection result kind.
    RelayRejected {
        typename: &'static str,
        reason: String,
    },

    /// Upload, poll creation, signing or the API call itself failed.
    NetworkOrChain { message: String },

    /// Another submission from the same composer is still running.
    SubmissionInFlight,

    /// The draft is not ready to submit (uploads running, invalid poll,
    /// too many mentions).
    SubmissionBlocked { reason: &'static str },
}

impl ComposerError {
    pub fn validation(message: impl Into<String>) -> Self {
        ComposerError::ValidationFailed {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ComposerError::AuthRequired | ComposerError::AccountSuspended => ErrorCategory::Auth,
            ComposerError::ValidationFailed { .. } => ErrorCategory::Validation,
            ComposerError::RelayRejected { .. } => ErrorCategory::Relay,
            ComposerError::NetworkOrChain { .. } => ErrorCategory::Network,
            ComposerError::SubmissionInFlight | ComposerError::SubmissionBlocked { .. } => {
                ErrorCategory::Client
            }
        }
    }

    /// Where the error is displayed.
    pub fn surface(&self) -> Surface {
        match self {
            ComposerError::AuthRequired
            | ComposerError::AccountSuspended
            | ComposerError::ValidationFailed { .. } => Surface::Field,
            ComposerError::RelayRejected { .. }
            | ComposerError::SubmissionInFlight
            | ComposerError::SubmissionBlocked { .. } => Surface::Toast,
            ComposerError::NetworkOrChain { .. } => Surface::Banner,
        }
    }

    /// Message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            ComposerError::AuthRequired => SIGN_WALLET.to_string(),
            ComposerError::AccountSuspended => SUSPENDED.to_string(),
            ComposerError::ValidationFailed { message } => message.clone(),
            ComposerError::RelayRejected { .. } => SOMETHING_WENT_WRONG.to_string(),
            ComposerError::NetworkOrChain { message } if message.is_empty() => {
                SOMETHING_WENT_WRONG.to_string()
            }
            ComposerError::NetworkOrChain { message } => message.clone(),
            ComposerError::SubmissionInFlight => {
                "A publication is already being submitted.".to_string()
            }
            ComposerError::SubmissionBlocked { reason } => reason.to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ComposerError::AuthRequired => "E_COMPOSER_AUTH",
            ComposerError::AccountSuspended => "E_COMPOSER_SUSPENDED",
            ComposerError::ValidationFailed { .. } => "E_COMPOSER_VALIDATION",
            ComposerError::RelayRejected { .. } => "E_COMPOSER_RELAY",
            ComposerError::NetworkOrChain { .. } => "E_COMPOSER_NETWORK",
            ComposerError::SubmissionInFlight => "E_COMPOSER_IN_FLIGHT",
            ComposerError::SubmissionBlocked { .. } => "E_COMPOSER_BLOCKED",
        }
    }
}

impl fmt::Display for ComposerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposerError::RelayRejected { typename, reason } => {
                write!(f, "Relay rejected the publication ({}): {}", typename, reason)
            }
            other => write!(f, "{}", other.user_message()),
        }
    }
}

impl std::error::Error for ComposerError {}

impl From<ApiError> for ComposerError {
    fn from(err: ApiError) -> Self {
        ComposerError::NetworkOrChain {
            message: err.to_string(),
        }
    }
}

impl From<UploadError> for ComposerError {
    fn from(err: UploadError) -> Self {
        ComposerError::NetworkOrChain {
            message: err.to_string(),
        }
    }
}

impl From<PollError> for ComposerError {
    fn from(err: PollError) -> Self {
        ComposerError::NetworkOrChain {
            message: err.to_string(),
        }
    }
}

impl From<SignerError> for ComposerError {
    fn from(err: SignerError) -> Self {
        ComposerError::NetworkOrChain {
            message: err.to_string(),
        }
    }
}
