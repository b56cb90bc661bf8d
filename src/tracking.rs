//! Analytics event names.

pub mod publication {
    pub const NEW_POST: &str = "New post";
    pub const NEW_COMMENT: &str = "New comment";
    pub const NEW_QUOTE: &str = "New quote";
}

pub mod pagination {
    pub const NFT_FEED: &str = "Paginate NFT feed";
}
