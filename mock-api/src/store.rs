//! In-memory state of the mock backend.
//!
//! Everything sits behind one mutex. Handlers take the lock, copy out what
//! they need and release it before building a response.

use jiff::Timestamp;
use payloads::{
    AuctionId,
    responses::{
        ActiveEvent, AuctionSummary, GalleryItem, GeneralRule, MyAuction,
        WishlistItem,
    },
};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Endpoints whose responses can be replaced by an injected failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    GeneralRules,
    ActiveEvent,
    Auctions,
    MyAuctions,
    Gallery,
    Wishlist,
    AddToWishlist,
    RemoveFromWishlist,
}

/// A canned failure returned instead of the real response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub status: u16,
    /// Raw response body; `None` sends an empty body.
    pub body: Option<String>,
}

impl Failure {
    /// A JSON error body with the given message.
    pub fn with_message(status: u16, message: &str) -> Self {
        Self {
            status,
            body: Some(serde_json::json!({ "message": message }).to_string()),
        }
    }

    /// A failure whose body carries no message at all.
    pub fn bare(status: u16) -> Self {
        Self { status, body: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
}

#[derive(Default)]
struct Inner {
    general_rules: Vec<GeneralRule>,
    active_event: Option<ActiveEvent>,
    auctions: Vec<AuctionSummary>,
    gallery: Vec<GalleryItem>,
    /// token -> username
    users: HashMap<String, String>,
    /// username -> bid history
    bids: HashMap<String, Vec<MyAuction>>,
    /// username -> wishlist, oldest first
    wishlists: HashMap<String, Vec<WishlistItem>>,
    failures: HashMap<Endpoint, Failure>,
    requests: Vec<RecordedRequest>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Auction not found")]
    AuctionNotFound,
    #[error("Auction has ended")]
    AuctionEnded,
    #[error("Auction already exists in wishlist")]
    AlreadyWishlisted,
    #[error("Wishlist item not found")]
    WishlistItemNotFound,
}

#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<Mutex<Inner>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_general_rules(&self, rules: Vec<GeneralRule>) {
        self.lock().general_rules = rules;
    }

    pub fn general_rules(&self) -> Vec<GeneralRule> {
        self.lock().general_rules.clone()
    }

    pub fn set_active_event(&self, event: Option<ActiveEvent>) {
        self.lock().active_event = event;
    }

    pub fn active_event(&self) -> Option<ActiveEvent> {
        self.lock().active_event.clone()
    }

    pub fn add_auction(&self, auction: AuctionSummary) {
        self.lock().auctions.push(auction);
    }

    pub fn auctions(&self) -> Vec<AuctionSummary> {
        self.lock().auctions.clone()
    }

    pub fn auction(&self, auction_id: AuctionId) -> Option<AuctionSummary> {
        self.lock()
            .auctions
            .iter()
            .find(|auction| auction.id == auction_id)
            .cloned()
    }

    pub fn add_gallery_item(&self, item: GalleryItem) {
        self.lock().gallery.push(item);
    }

    /// Newest first.
    pub fn gallery(&self) -> Vec<GalleryItem> {
        let mut items = self.lock().gallery.clone();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }

    /// Register a bearer token for a user.
    pub fn add_user(&self, token: &str, username: &str) {
        self.lock()
            .users
            .insert(token.to_string(), username.to_string());
    }

    pub fn user_for_token(&self, token: &str) -> Option<String> {
        self.lock().users.get(token).cloned()
    }

    pub fn record_bid(
        &self,
        username: &str,
        auction_id: AuctionId,
        amount: Decimal,
        at: Timestamp,
        is_winning: bool,
    ) -> Result<MyAuction, StoreError> {
        let auction = self
            .auction(auction_id)
            .ok_or(StoreError::AuctionNotFound)?;
        let entry = MyAuction {
            auction,
            my_highest_bid: amount,
            last_bid_at: at,
            is_winning,
        };
        let mut inner = self.lock();
        let history = inner.bids.entry(username.to_string()).or_default();
        history.retain(|existing| existing.auction.id != auction_id);
        history.push(entry.clone());
        Ok(entry)
    }

    /// Most recent bid first.
    pub fn bid_history(&self, username: &str) -> Vec<MyAuction> {
        let mut history = self
            .lock()
            .bids
            .get(username)
            .cloned()
            .unwrap_or_default();
        history.sort_by(|a, b| b.last_bid_at.cmp(&a.last_bid_at));
        history
    }

    /// Most recently added first.
    pub fn wishlist(&self, username: &str) -> Vec<WishlistItem> {
        let mut items = self
            .lock()
            .wishlists
            .get(username)
            .cloned()
            .unwrap_or_default();
        items.reverse();
        items
    }

    pub fn add_to_wishlist(
        &self,
        username: &str,
        auction_id: AuctionId,
        at: Timestamp,
    ) -> Result<WishlistItem, StoreError> {
        let auction = self
            .auction(auction_id)
            .ok_or(StoreError::AuctionNotFound)?;
        if auction.status == payloads::AuctionStatus::Ended {
            return Err(StoreError::AuctionEnded);
        }
        let mut inner = self.lock();
        let items = inner.wishlists.entry(username.to_string()).or_default();
        if items.iter().any(|item| item.auction.id == auction_id) {
            return Err(StoreError::AlreadyWishlisted);
        }
        let item = WishlistItem {
            auction,
            added_at: at,
        };
        items.push(item.clone());
        Ok(item)
    }

    pub fn remove_from_wishlist(
        &self,
        username: &str,
        auction_id: AuctionId,
    ) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let items = inner.wishlists.entry(username.to_string()).or_default();
        let before = items.len();
        items.retain(|item| item.auction.id != auction_id);
        if items.len() == before {
            return Err(StoreError::WishlistItemNotFound);
        }
        Ok(())
    }

    /// Make an endpoint fail until [`Store::clear_failures`] is called.
    pub fn fail(&self, endpoint: Endpoint, failure: Failure) {
        self.lock().failures.insert(endpoint, failure);
    }

    pub fn clear_failures(&self) {
        self.lock().failures.clear();
    }

    pub fn injected_failure(&self, endpoint: Endpoint) -> Option<Failure> {
        self.lock().failures.get(&endpoint).cloned()
    }

    pub fn record_request(
        &self,
        method: &str,
        path: &str,
        authorization: Option<String>,
    ) {
        self.lock().requests.push(RecordedRequest {
            method: method.to_string(),
            path: path.to_string(),
            authorization,
        });
    }

    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    /// The last request made to `path`, if any.
    pub fn last_request_to(&self, path: &str) -> Option<RecordedRequest> {
        self.lock()
            .requests
            .iter()
            .rev()
            .find(|request| request.path == path)
            .cloned()
    }
}
