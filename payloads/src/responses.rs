use crate::{AuctionId, AuctionStatus, EventId, GalleryItemId, RuleId};
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Single-value response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            message: None,
            data,
        }
    }
}

/// Pagination metadata. Pages are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

impl PageMeta {
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }
}

/// Paginated list envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Body of a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessMessage {
    pub message: String,
}

/// One entry of the platform's general auction rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralRule {
    pub id: RuleId,
    pub title: String,
    /// Markdown
    pub content: String,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEvent {
    pub id: EventId,
    pub name: String,
    pub description: String,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
    #[serde(default)]
    pub banner_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionSummary {
    pub id: AuctionId,
    pub title: String,
    /// Koi variety, e.g. "Kohaku" or "Showa"
    pub variety: String,
    pub size_cm: u32,
    pub breeder: String,
    pub image_url: String,
    pub opening_price: Decimal,
    pub current_price: Decimal,
    pub bid_count: u32,
    pub status: AuctionStatus,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
}

/// An auction from the logged in user's bid history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyAuction {
    pub auction: AuctionSummary,
    pub my_highest_bid: Decimal,
    pub last_bid_at: Timestamp,
    pub is_winning: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: GalleryItemId,
    pub title: String,
    pub variety: String,
    pub size_cm: u32,
    pub image_url: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub auction: AuctionSummary,
    pub added_at: Timestamp,
}

/// Data rendered into a page ahead of time, tagged with when it was
/// fetched so the client cache can judge its freshness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialData<T> {
    pub generated_at: Timestamp,
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let meta = PageMeta {
            page: 1,
            limit: 12,
            total: 25,
        };
        assert_eq!(meta.total_pages(), 3);
        assert!(meta.has_next());
        assert!(!meta.has_previous());

        let last = PageMeta { page: 3, ..meta };
        assert!(!last.has_next());
        assert!(last.has_previous());

        let empty = PageMeta {
            page: 1,
            limit: 12,
            total: 0,
        };
        assert_eq!(empty.total_pages(), 0);
        assert!(!empty.has_next());

        let zero_limit = PageMeta {
            page: 1,
            limit: 0,
            total: 5,
        };
        assert_eq!(zero_limit.total_pages(), 0);
    }

    #[test]
    fn error_body_tolerates_missing_fields() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message, None);
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"Auction not found","code":"NOT_FOUND"}"#)
                .unwrap();
        assert_eq!(body.message.as_deref(), Some("Auction not found"));
        assert_eq!(body.code.as_deref(), Some("NOT_FOUND"));
    }
}
