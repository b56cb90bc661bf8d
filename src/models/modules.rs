//! Collect and reference module configuration and the open-action inputs
//! built from it.

use serde::{Deserialize, Serialize};

/// Collect open-action flavours the composer can configure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CollectModuleType {
    SimpleCollectOpenActionModule,
    MultirecipientFeeCollectOpenActionModule,
    /// A module this client does not know how to parameterise.
    #[serde(other)]
    Unknown,
}

impl CollectModuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectModuleType::SimpleCollectOpenActionModule => "SimpleCollectOpenActionModule",
            CollectModuleType::MultirecipientFeeCollectOpenActionModule => {
                "MultirecipientFeeCollectOpenActionModule"
            }
            CollectModuleType::Unknown => "UnknownOpenActionModule",
        }
    }
}

/// Reference modules selectable in the reference settings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReferenceModuleType {
    #[default]
    FollowerOnlyReferenceModule,
    DegreesOfSeparationReferenceModule,
}

impl ReferenceModuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceModuleType::FollowerOnlyReferenceModule => "FollowerOnlyReferenceModule",
            ReferenceModuleType::DegreesOfSeparationReferenceModule => {
                "DegreesOfSeparationReferenceModule"
            }
        }
    }
}

/// Price of a collect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Amount {
    pub currency: String,
    pub value: String,
}

/// One fee recipient and its split percentage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipient {
    pub recipient: String,
    pub split: f64,
}

/// Collect settings as edited in the composer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollectModule {
    #[serde(rename = "type")]
    pub kind: Option<CollectModuleType>,
    pub amount: Option<Amount>,
    pub collect_limit: Option<String>,
    pub ends_at: Option<String>,
    pub follower_only: bool,
    pub recipients: Vec<Recipient>,
    pub referral_fee: Option<f64>,
}

impl CollectModule {
    pub fn is_configured(&self) -> bool {
        self.kind.is_some()
    }

    /// Build the collect open-action input for the configured module type.
    ///
    /// Returns `None` when no module is selected or the type is unknown.
    pub fn params(&self) -> Option<CollectOpenActionModuleInput> {
        match self.kind? {
            CollectModuleType::SimpleCollectOpenActionModule => Some(
                CollectOpenActionModuleInput::SimpleCollectOpenAction(SimpleCollectInput {
                    amount: self.amount.clone(),
                    collect_limit: self.collect_limit.clone(),
                    ends_at: self.ends_at.clone(),
                    follower_only: self.follower_only,
                    referral_fee: self.referral_fee,
                    recipient: self.recipients.first().map(|r| r.recipient.clone()),
                }),
            ),
            CollectModuleType::MultirecipientFeeCollectOpenActionModule => Some(
                CollectOpenActionModuleInput::MultirecipientCollectOpenAction(
                    MultirecipientCollectInput {
                        amount: self.amount.clone(),
                        collect_limit: self.collect_limit.clone(),
                        ends_at: self.ends_at.clone(),
                        follower_only: self.follower_only,
                        referral_fee: self.referral_fee,
                        recipients: self.recipients.clone(),
                    },
                ),
            ),
            CollectModuleType::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimpleCollectInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<String>,
    pub follower_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MultirecipientCollectInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collect_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<String>,
    pub follower_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_fee: Option<f64>,
    pub recipients: Vec<Recipient>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum CollectOpenActionModuleInput {
    SimpleCollectOpenAction(SimpleCollectInput),
    MultirecipientCollectOpenAction(MultirecipientCollectInput),
}

/// An arbitrary open action, e.g. the NFT mint embed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnknownOpenActionInput {
    pub address: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum OpenActionModuleInput {
    CollectOpenAction(CollectOpenActionModuleInput),
    UnknownOpenAction(UnknownOpenActionInput),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DegreesOfSeparationInput {
    pub comments_restricted: bool,
    pub degrees_of_separation: u8,
    pub mirrors_restricted: bool,
    pub quotes_restricted: bool,
}

/// Restriction on who may comment, quote or mirror.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceModuleInput {
    FollowerOnlyReferenceModule(bool),
    DegreesOfSeparationReferenceModule(DegreesOfSeparationInput),
}
