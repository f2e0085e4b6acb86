use crate::{AuctionId, AuctionStatus};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_LIMIT: u32 = 12;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// 1-indexed page selection sent as `?page=&limit=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

impl PageQuery {
    /// Clamps page to at least 1 and limit into `1..=MAX_PAGE_LIMIT`.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_LIMIT),
        }
    }

    pub fn first(limit: u32) -> Self {
        Self::new(1, limit)
    }

    pub fn next(self) -> Self {
        Self::new(self.page.saturating_add(1), self.limit)
    }

    pub fn previous(self) -> Self {
        Self::new(self.page.saturating_sub(1), self.limit)
    }

    pub fn offset(&self) -> usize {
        (self.page.max(1) as usize - 1) * self.limit as usize
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_LIMIT)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuctionQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AuctionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variety: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MyAuctionQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AuctionStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GalleryQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variety: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToWishlist {
    pub auction_id: AuctionId,
}
