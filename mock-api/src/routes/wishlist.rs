use actix_web::{HttpRequest, HttpResponse, delete, get, post, web};
use jiff::Timestamp;
use payloads::{
    AuctionId,
    requests::AddToWishlist,
    responses::{Envelope, SuccessMessage},
};
use uuid::Uuid;

use super::{APIError, PageParams, authenticated_user, check_failure, paginate};
use crate::store::{Endpoint, Store};

#[tracing::instrument(skip(req, store), fields(username = tracing::field::Empty))]
#[get("/wishlist")]
pub async fn list_wishlist(
    req: HttpRequest,
    params: web::Query<PageParams>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    check_failure(&store, Endpoint::Wishlist)?;
    let username = authenticated_user(&req, &store)?;
    let items = store.wishlist(&username);
    Ok(HttpResponse::Ok().json(paginate(items, params.query())))
}

#[tracing::instrument(skip(req, store), fields(username = tracing::field::Empty))]
#[post("/wishlist")]
pub async fn add_to_wishlist(
    req: HttpRequest,
    details: web::Json<AddToWishlist>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    check_failure(&store, Endpoint::AddToWishlist)?;
    let username = authenticated_user(&req, &store)?;
    let item =
        store.add_to_wishlist(&username, details.auction_id, Timestamp::now())?;
    Ok(HttpResponse::Created().json(Envelope {
        message: Some("Ditambahkan ke wishlist".to_string()),
        data: item,
    }))
}

#[tracing::instrument(skip(req, store), fields(username = tracing::field::Empty))]
#[delete("/wishlist/{auction_id}")]
pub async fn remove_from_wishlist(
    req: HttpRequest,
    auction_id: web::Path<Uuid>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    check_failure(&store, Endpoint::RemoveFromWishlist)?;
    let username = authenticated_user(&req, &store)?;
    store.remove_from_wishlist(&username, AuctionId(auction_id.into_inner()))?;
    Ok(HttpResponse::Ok().json(SuccessMessage {
        message: "Dihapus dari wishlist".to_string(),
    }))
}
