//! GraphQL documents sent to the Lens API.

use crate::models::{Channel, Dispatch, PublicationKind, PublicationRequest};

const MOMOKA_RESULT: &str = "__typename \
    ... on CreateMomokaPublicationResult { id proof } \
    ... on LensProfileManagerRelayError { reason }";

const ONCHAIN_RESULT: &str = "__typename \
    ... on RelaySuccess { txHash txId } \
    ... on LensProfileManagerRelayError { reason }";

const BROADCAST_MOMOKA_RESULT: &str = "__typename \
    ... on CreateMomokaPublicationResult { id proof } \
    ... on RelayError { reason }";

const BROADCAST_ONCHAIN_RESULT: &str = "__typename \
    ... on RelaySuccess { txHash txId } \
    ... on RelayError { reason }";

const TYPED_DATA_DOMAIN: &str = "domain { name chainId version verifyingContract }";

const POST_VALUE: &str = "value { nonce deadline profileId contentURI actionModules \
    actionModulesInitDatas referenceModule referenceModuleInitData }";

const REFERENCING_VALUE: &str = "value { nonce deadline profileId contentURI pointedProfileId \
    pointedPubId referrerProfileIds referrerPubIds referenceModuleData actionModules \
    actionModulesInitDatas referenceModule referenceModuleInitData }";

pub const NFTS: &str = "query Nfts($request: NFTsRequest!) { \
    nfts(request: $request) { \
    items { chainId contractAddress tokenId name collectionName contentUri: contentURI \
    originalContent { uri animatedUrl } } \
    pageInfo { next prev totalCount } } }";

pub const PROFILE: &str = "query Profile($request: ProfileRequest!) { \
    profile(request: $request) { \
    id handle { localName fullHandle } ownedBy { address } signless sponsor } }";

/// GraphQL input type of the request argument.
fn request_type(request: &PublicationRequest) -> &'static str {
    match (request.channel(), request.kind()) {
        (Channel::Momoka, PublicationKind::Post) => "MomokaPostRequest",
        (Channel::Momoka, PublicationKind::Comment) => "MomokaCommentRequest",
        (Channel::Momoka, PublicationKind::Quote) => "MomokaQuoteRequest",
        (Channel::Onchain, PublicationKind::Post) => "OnchainPostRequest",
        (Channel::Onchain, PublicationKind::Comment) => "OnchainCommentRequest",
        (Channel::Onchain, PublicationKind::Quote) => "OnchainQuoteRequest",
    }
}

fn typed_data_selection(kind: PublicationKind) -> String {
    let (type_name, value) = match kind {
        PublicationKind::Post => ("Post", POST_VALUE),
        PublicationKind::Comment => ("Comment", REFERENCING_VALUE),
        PublicationKind::Quote => ("Quote", REFERENCING_VALUE),
    };
    format!(
        "id expiresAt typedData {{ types {{ {} {{ name type }} }} {} {} }}",
        type_name, TYPED_DATA_DOMAIN, value
    )
}

/// Capitalized operation name used as the GraphQL operation name.
fn operation_name(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Mutation document of a create-publication request.
pub fn publication_document(request: &PublicationRequest) -> String {
    let field = request.operation();
    let selection = match (request.dispatch(), request.channel()) {
        (Dispatch::LensManager, Channel::Momoka) => MOMOKA_RESULT.to_string(),
        (Dispatch::LensManager, Channel::Onchain) => ONCHAIN_RESULT.to_string(),
        (Dispatch::TypedData, _) => typed_data_selection(request.kind()),
    };

    let has_options = matches!(
        (request.dispatch(), request.channel()),
        (Dispatch::TypedData, Channel::Onchain)
    );
    let (params, args) = if has_options {
        (
            format!(
                "$request: {}!, $options: TypedDataOptions",
                request_type(request)
            ),
            "request: $request, options: $options",
        )
    } else {
        (
            format!("$request: {}!", request_type(request)),
            "request: $request",
        )
    };

    format!(
        "mutation {}({}) {{ {}({}) {{ {} }} }}",
        operation_name(field),
        params,
        field,
        args,
        selection
    )
}

pub fn broadcast_operation(channel: Channel) -> &'static str {
    match channel {
        Channel::Momoka => "broadcastOnMomoka",
        Channel::Onchain => "broadcastOnchain",
    }
}

/// Mutation document broadcasting signed typed data.
pub fn broadcast_document(channel: Channel) -> String {
    let field = broadcast_operation(channel);
    let selection = match channel {
        Channel::Momoka => BROADCAST_MOMOKA_RESULT,
        Channel::Onchain => BROADCAST_ONCHAIN_RESULT,
    };
    format!(
        "mutation {}($request: BroadcastRequest!) {{ {}(request: $request) {{ {} }} }}",
        operation_name(field),
        field,
        selection
    )
}
