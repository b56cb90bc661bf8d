//! NFT feed of a profile, fetched page by page as the end of the grid
//! scrolls into view.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use super::view::{empty_message, FeedView, FEED_ERROR_TITLE};
use crate::error::{ApiError, ApiResult};
use crate::models::{Nft, NftFeedRequest, PageInfo, Profile};
use crate::traits::{AnalyticsSink, LensApi};
use crate::tracking::pagination::NFT_FEED;

const POLYGON: u64 = 137;
const POLYGON_MUMBAI: u64 = 80001;
const ETHEREUM: u64 = 1;
const ETHEREUM_KOVAN: u64 = 42;

/// Chains queried for NFTs.
pub fn chain_ids(is_mainnet: bool) -> Vec<u64> {
    if is_mainnet {
        vec![POLYGON, ETHEREUM]
    } else {
        vec![POLYGON_MUMBAI, ETHEREUM_KOVAN]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Idle,
    Loading,
    Loaded,
    FetchingMore,
    /// Every page has been fetched
    Exhausted,
}

pub struct NftFeedLoader {
    api: Arc<dyn LensApi>,
    analytics: Arc<dyn AnalyticsSink>,
    profile_slug: String,
    request: NftFeedRequest,
    items: Vec<Nft>,
    page_info: PageInfo,
    status: FeedStatus,
    error: Option<ApiError>,
    sentinel_in_view: bool,
}

impl NftFeedLoader {
    pub fn new(
        api: Arc<dyn LensApi>,
        analytics: Arc<dyn AnalyticsSink>,
        profile: &Profile,
        is_mainnet: bool,
        page_size: u32,
    ) -> Self {
        Self {
            api,
            analytics,
            profile_slug: profile.slug_with_prefix(),
            request: NftFeedRequest {
                chain_ids: chain_ids(is_mainnet),
                owner_address: profile.owned_by.address.clone(),
                limit: page_size,
                cursor: None,
            },
            items: Vec::new(),
            page_info: PageInfo::default(),
            status: FeedStatus::Idle,
            error: None,
            sentinel_in_view: false,
        }
    }

    pub fn status(&self) -> FeedStatus {
        self.status
    }

    pub fn items(&self) -> &[Nft] {
        &self.items
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn request(&self) -> &NftFeedRequest {
        &self.request
    }

    /// A next page exists and the total count has not been reached.
    pub fn has_more(&self) -> bool {
        if self.page_info.next.is_none() {
            return false;
        }
        match self.page_info.total_count {
            Some(total) => (self.items.len() as u64) < total,
            None => true,
        }
    }

    /// Fetch the first page, replacing anything loaded before.
    ///
    /// Does nothing for a profile without an owner address.
    pub async fn load(&mut self) -> ApiResult<()> {
        if self.request.owner_address.is_empty() {
            debug!("No owner address; skipping NFT feed query");
            return Ok(());
        }

        self.status = FeedStatus::Loading;
        self.error = None;
        self.sentinel_in_view = false;

        let request = self.request.with_cursor(None);
        match self.api.nfts(&request).await {
            Ok(page) => {
                debug!(count = page.items.len(), "NFT feed loaded");
                self.items = page.items;
                self.page_info = page.page_info;
                self.settle();
                Ok(())
            }
            Err(err) => {
                warn!("Failed to load NFT feed: {}", err);
                self.status = FeedStatus::Idle;
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Report the sentinel's visibility. A page is fetched only when the
    /// sentinel goes from hidden to visible while more pages exist.
    ///
    /// Returns whether a page was fetched.
    pub async fn on_visibility_change(&mut self, in_view: bool) -> ApiResult<bool> {
        let entered = in_view && !self.sentinel_in_view;
        self.sentinel_in_view = in_view;

        if !entered
            || self.status != FeedStatus::Loaded
            || self.error.is_some()
            || !self.has_more()
        {
            return Ok(false);
        }

        self.fetch_more().await.map(|_| true)
    }

    /// Keep scrolling until the feed is exhausted or a fetch fails.
    pub async fn load_all(&mut self) -> ApiResult<()> {
        if self.status == FeedStatus::Idle {
            self.load().await?;
        }
        loop {
            self.on_visibility_change(false).await?;
            if !self.on_visibility_change(true).await? {
                return Ok(());
            }
        }
    }

    async fn fetch_more(&mut self) -> ApiResult<()> {
        self.status = FeedStatus::FetchingMore;
        let request = self.request.with_cursor(self.page_info.next.clone());
        self.analytics.track(NFT_FEED, json!({}));

        match self.api.nfts(&request).await {
            Ok(page) => {
                debug!(count = page.items.len(), "NFT feed page appended");
                self.items.extend(page.items);
                self.page_info = page.page_info;
                self.settle();
                Ok(())
            }
            Err(err) => {
                warn!("Failed to paginate NFT feed: {}", err);
                self.status = FeedStatus::Loaded;
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn settle(&mut self) {
        self.status = if self.has_more() {
            FeedStatus::Loaded
        } else {
            FeedStatus::Exhausted
        };
    }

    pub fn view(&self) -> FeedView {
        if let Some(err) = &self.error {
            return FeedView::Error {
                title: FEED_ERROR_TITLE,
                message: err.to_string(),
            };
        }
        if self.request.owner_address.is_empty() {
            return FeedView::Empty {
                message: empty_message(&self.profile_slug),
            };
        }

        match self.status {
            FeedStatus::Idle | FeedStatus::Loading => FeedView::Shimmer,
            _ if self.items.is_empty() => FeedView::Empty {
                message: empty_message(&self.profile_slug),
            },
            _ => FeedView::Grid {
                items: self.items.clone(),
                show_sentinel: self.has_more(),
            },
        }
    }
}
