//! Error handling for the hey client.
//!
//! - **Error Categories**: classification used for display and resubmission
//! - **API Errors**: GraphQL transport, `errors` payloads and decoding
//! - **Composer Errors**: the submission taxonomy surfaced to the user
//!
//! | Category | Description | Transient |
//! |----------|-------------|-----------|
//! | Network | Transport, GraphQL or chain failure | Yes |
//! | Auth | No profile or suspended account | No |
//! | Relay | Relay rejection result kind | Yes |
//! | Validation | Draft field invalid | No |
//! | Client | Refused re-entry | No |
//! | Configuration | Config issues | No |

mod api;
mod category;
mod composer;
mod result;

pub use api::ApiError;
pub use category::ErrorCategory;
pub use composer::{
    ComposerError, Surface, SIGN_WALLET, SOMETHING_WENT_WRONG, SUSPENDED, TRANSACTION_FAILED,
};
pub use result::{ApiResult, ComposerResult};
