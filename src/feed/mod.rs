//! Paginated feeds.

pub mod nft_feed;
pub mod view;

pub use nft_feed::{chain_ids, FeedStatus, NftFeedLoader};
pub use view::{FeedView, FEED_ERROR_TITLE};
