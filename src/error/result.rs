//! Result type aliases.

use super::api::ApiError;
use super::composer::ComposerError;

/// Result of a composer operation.
pub type ComposerResult<T> = Result<T, ComposerError>;

/// Result of a Lens API call.
pub type ApiResult<T> = Result<T, ApiError>;
