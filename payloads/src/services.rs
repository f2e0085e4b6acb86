//! Domain service functions.
//!
//! Each wraps one backend endpoint. Failures are logged and collapsed into
//! a [`ServiceError`] carrying the backend's message, or the function's
//! fallback when the backend did not send one.

use crate::{
    APIClient, AuctionId, ClientError, ServiceError, requests,
    responses::{
        ActiveEvent, AuctionSummary, GalleryItem, GeneralRule, MyAuction,
        Page, SuccessMessage, WishlistItem,
    },
};

pub const GENERAL_RULES_FALLBACK: &str = "Gagal memuat aturan umum";
pub const ACTIVE_EVENT_FALLBACK: &str = "Gagal memuat event aktif";
pub const AUCTIONS_FALLBACK: &str = "Gagal memuat daftar lelang";
pub const MY_AUCTIONS_FALLBACK: &str = "Gagal memuat riwayat lelang";
pub const GALLERY_FALLBACK: &str = "Gagal memuat galeri";
pub const WISHLIST_FALLBACK: &str = "Gagal memuat wishlist";
pub const ADD_TO_WISHLIST_FALLBACK: &str = "Gagal menambahkan ke wishlist";
pub const REMOVE_FROM_WISHLIST_FALLBACK: &str = "Gagal menghapus dari wishlist";

fn normalize<T>(
    operation: &'static str,
    fallback: &'static str,
    result: Result<T, ClientError>,
) -> Result<T, ServiceError> {
    result.map_err(|e| {
        tracing::error!(operation, "request failed: {e}");
        ServiceError::from_client(&e, fallback)
    })
}

pub async fn get_general_rules(
    client: &APIClient,
) -> Result<Vec<GeneralRule>, ServiceError> {
    let mut rules = normalize(
        "get_general_rules",
        GENERAL_RULES_FALLBACK,
        client.general_rules().await,
    )?;
    rules.sort_by_key(|rule| rule.position);
    Ok(rules)
}

pub async fn get_active_event(
    client: &APIClient,
) -> Result<Option<ActiveEvent>, ServiceError> {
    normalize(
        "get_active_event",
        ACTIVE_EVENT_FALLBACK,
        client.active_event().await,
    )
}

pub async fn get_auctions(
    client: &APIClient,
    query: &requests::AuctionQuery,
) -> Result<Page<AuctionSummary>, ServiceError> {
    normalize(
        "get_auctions",
        AUCTIONS_FALLBACK,
        client.list_auctions(query).await,
    )
}

pub async fn get_my_auctions(
    client: &APIClient,
    query: &requests::MyAuctionQuery,
) -> Result<Page<MyAuction>, ServiceError> {
    normalize(
        "get_my_auctions",
        MY_AUCTIONS_FALLBACK,
        client.list_my_auctions(query).await,
    )
}

pub async fn get_gallery(
    client: &APIClient,
    query: &requests::GalleryQuery,
) -> Result<Page<GalleryItem>, ServiceError> {
    normalize("get_gallery", GALLERY_FALLBACK, client.list_gallery(query).await)
}

pub async fn get_wishlist(
    client: &APIClient,
    query: &requests::PageQuery,
) -> Result<Page<WishlistItem>, ServiceError> {
    normalize(
        "get_wishlist",
        WISHLIST_FALLBACK,
        client.list_wishlist(query).await,
    )
}

pub async fn add_to_wishlist(
    client: &APIClient,
    auction_id: AuctionId,
) -> Result<WishlistItem, ServiceError> {
    let details = requests::AddToWishlist { auction_id };
    normalize(
        "add_to_wishlist",
        ADD_TO_WISHLIST_FALLBACK,
        client.add_to_wishlist(&details).await,
    )
}

pub async fn remove_from_wishlist(
    client: &APIClient,
    auction_id: AuctionId,
) -> Result<SuccessMessage, ServiceError> {
    normalize(
        "remove_from_wishlist",
        REMOVE_FROM_WISHLIST_FALLBACK,
        client.remove_from_wishlist(&auction_id).await,
    )
}
