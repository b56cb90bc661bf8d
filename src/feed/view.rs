//! What the NFT feed shows for a given loader state.

use crate::models::Nft;

pub const FEED_ERROR_TITLE: &str = "Failed to load nft feed";

#[derive(Debug, Clone, PartialEq)]
pub enum FeedView {
    /// First page still loading
    Shimmer,
    Empty {
        message: String,
    },
    /// The grid is suppressed while an error is shown.
    Error {
        title: &'static str,
        message: String,
    },
    Grid {
        items: Vec<Nft>,
        /// Render the sentinel that triggers the next page
        show_sentinel: bool,
    },
}

pub fn empty_message(slug_with_prefix: &str) -> String {
    format!("{} doesn't have any NFTs!", slug_with_prefix)
}

impl FeedView {
    pub fn is_grid(&self) -> bool {
        matches!(self, FeedView::Grid { .. })
    }

    pub fn shows_sentinel(&self) -> bool {
        matches!(
            self,
            FeedView::Grid {
                show_sentinel: true,
                ..
            }
        )
    }
}
