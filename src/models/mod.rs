pub mod metadata;
pub mod modules;
pub mod nft;
pub mod profile;
pub mod publication;
pub mod relay;
pub mod request;

pub use metadata::{
    LensMetadata, MainContentFocus, Marketplace, MediaItem, MetadataAttribute,
    MetadataAttributeType, PublicationMetadata, POLL_ID_ATTRIBUTE,
};
pub use modules::{
    Amount, CollectModule, CollectModuleType, CollectOpenActionModuleInput,
    DegreesOfSeparationInput, OpenActionModuleInput, Recipient, ReferenceModuleInput,
    ReferenceModuleType, UnknownOpenActionInput,
};
pub use nft::{Nft, NftContent, NftFeedRequest, NftPage, PageInfo};
pub use profile::{Handle, OwnedBy, Profile, ProfileStatus};
pub use publication::{
    AttachmentType, MomokaInfo, NewAttachment, PublicationKind, PublicationRef,
    PublicationTarget,
};
pub use relay::{RelayResult, SubmissionResponse, TypedDataResult};
pub use request::{
    BroadcastRequest, Channel, Dispatch, MomokaCommentRequest, MomokaPostRequest,
    MomokaQuoteRequest, OnchainCommentRequest, OnchainPayload, OnchainPostRequest,
    OnchainQuoteRequest, PublicationRequest, TypedDataOptions,
};

use serde::Deserializer;

/// Helper to deserialize an id that the API sends either as a string or as
/// an integer (chain ids, token ids).
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}
