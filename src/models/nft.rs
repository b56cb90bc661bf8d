//! NFTs owned by a profile and the paginated feed request.

use serde::{Deserialize, Serialize};

use super::deserialize_id;

/// Media of an NFT.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NftContent {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub animated_url: Option<String>,
}

/// One owned NFT.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Nft {
    #[serde(deserialize_with = "deserialize_id")]
    pub chain_id: String,
    pub contract_address: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub token_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub collection_name: Option<String>,
    #[serde(default)]
    pub content_uri: Option<String>,
    #[serde(default)]
    pub original_content: NftContent,
}

impl Nft {
    /// Stable identity of the NFT inside the grid.
    pub fn key(&self) -> String {
        format!("{}_{}_{}", self.chain_id, self.contract_address, self.token_id)
    }
}

/// Pagination info of a feed page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

/// One page of the NFT feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NftPage {
    pub items: Vec<Nft>,
    pub page_info: PageInfo,
}

/// Variables of the `nfts` query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NftFeedRequest {
    pub chain_ids: Vec<u64>,
    pub owner_address: String,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl NftFeedRequest {
    /// Same request, next page.
    pub fn with_cursor(&self, cursor: Option<String>) -> Self {
        Self {
            cursor,
            ..self.clone()
        }
    }
}
