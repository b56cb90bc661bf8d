//! Submission planning: picks the channel, the dispatch mode and builds the
//! matching request. Pure; no I/O.

use crate::models::{
    CollectOpenActionModuleInput, MomokaCommentRequest, MomokaPostRequest, MomokaQuoteRequest,
    OnchainCommentRequest, OnchainPayload, OnchainPostRequest, OnchainQuoteRequest,
    OpenActionModuleInput, PublicationRequest, PublicationTarget, ReferenceModuleInput,
    TypedDataOptions,
};

/// Everything the decision depends on.
#[derive(Debug, Clone)]
pub struct PlanInput {
    pub target: PublicationTarget,
    pub content_uri: String,
    /// A collect module type is selected in the draft
    pub has_collect_module: bool,
    pub collect_params: Option<CollectOpenActionModuleInput>,
    pub nft_open_action_embed: Option<OpenActionModuleInput>,
    pub reference_module: Option<ReferenceModuleInput>,
    pub can_use_lens_manager: bool,
    /// Signature nonce used by on-chain typed data
    pub nonce: u64,
}

/// Momoka is used only for relay-eligible targets without an NFT embed.
pub fn uses_momoka(input: &PlanInput) -> bool {
    input.target.is_relay_eligible(input.has_collect_module)
        && input.nft_open_action_embed.is_none()
}

/// Open actions in order: the NFT embed first, then the collect action.
pub fn open_action_modules(input: &PlanInput) -> Vec<OpenActionModuleInput> {
    let mut modules = Vec::new();
    if let Some(embed) = &input.nft_open_action_embed {
        modules.push(embed.clone());
    }
    if let Some(params) = &input.collect_params {
        modules.push(OpenActionModuleInput::CollectOpenAction(params.clone()));
    }
    modules
}

pub fn plan_submission(input: &PlanInput) -> PublicationRequest {
    if uses_momoka(input) {
        plan_momoka(input)
    } else {
        plan_onchain(input)
    }
}

fn plan_momoka(input: &PlanInput) -> PublicationRequest {
    let content_uri = input.content_uri.clone();
    let manager = input.can_use_lens_manager;

    match &input.target {
        PublicationTarget::Post => {
            let request = MomokaPostRequest { content_uri };
            if manager {
                PublicationRequest::PostOnMomoka(request)
            } else {
                PublicationRequest::CreateMomokaPostTypedData(request)
            }
        }
        PublicationTarget::Comment(target) => {
            let request = MomokaCommentRequest {
                comment_on: target.id.clone(),
                content_uri,
            };
            if manager {
                PublicationRequest::CommentOnMomoka(request)
            } else {
                PublicationRequest::CreateMomokaCommentTypedData(request)
            }
        }
        PublicationTarget::Quote(quoted) => {
            let request = MomokaQuoteRequest {
                quote_on: quoted.id.clone(),
                content_uri,
            };
            if manager {
                PublicationRequest::QuoteOnMomoka(request)
            } else {
                PublicationRequest::CreateMomokaQuoteTypedData(request)
            }
        }
    }
}

fn plan_onchain(input: &PlanInput) -> PublicationRequest {
    let payload = OnchainPayload {
        content_uri: input.content_uri.clone(),
        open_action_modules: open_action_modules(input),
        reference_module: input.reference_module.clone(),
    };
    let manager = input.can_use_lens_manager;
    let options = TypedDataOptions {
        override_sig_nonce: input.nonce,
    };

    match &input.target {
        PublicationTarget::Post => {
            let request = OnchainPostRequest { payload };
            if manager {
                PublicationRequest::PostOnchain(request)
            } else {
                PublicationRequest::CreateOnchainPostTypedData { request, options }
            }
        }
        PublicationTarget::Comment(target) => {
            let request = OnchainCommentRequest {
                comment_on: target.id.clone(),
                payload,
            };
            if manager {
                PublicationRequest::CommentOnchain(request)
            } else {
                PublicationRequest::CreateOnchainCommentTypedData { request, options }
            }
        }
        PublicationTarget::Quote(quoted) => {
            let request = OnchainQuoteRequest {
                quote_on: quoted.id.clone(),
                payload,
            };
            if manager {
                PublicationRequest::QuoteOnchain(request)
            } else {
                PublicationRequest::CreateOnchainQuoteTypedData { request, options }
            }
        }
    }
}
