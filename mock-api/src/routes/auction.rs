use actix_web::{HttpRequest, HttpResponse, get, web};
use payloads::AuctionStatus;
use serde::Deserialize;

use super::{APIError, authenticated_user, check_failure, page_query, paginate};
use crate::store::{Endpoint, Store};

#[derive(Debug, Deserialize)]
pub struct AuctionParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<AuctionStatus>,
    pub variety: Option<String>,
    pub search: Option<String>,
}

#[tracing::instrument(skip(store))]
#[get("/auctions")]
pub async fn list_auctions(
    params: web::Query<AuctionParams>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    check_failure(&store, Endpoint::Auctions)?;
    let search = params.search.as_deref().map(str::to_lowercase);
    let mut auctions: Vec<_> = store
        .auctions()
        .into_iter()
        .filter(|a| params.status.is_none_or(|status| a.status == status))
        .filter(|a| {
            params
                .variety
                .as_deref()
                .is_none_or(|v| a.variety.eq_ignore_ascii_case(v))
        })
        .filter(|a| {
            search
                .as_deref()
                .is_none_or(|s| a.title.to_lowercase().contains(s))
        })
        .collect();
    // soonest closing first
    auctions.sort_by(|a, b| a.end_at.cmp(&b.end_at));
    let query = page_query(params.page, params.limit);
    Ok(HttpResponse::Ok().json(paginate(auctions, query)))
}

#[derive(Debug, Deserialize)]
pub struct MyAuctionParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<AuctionStatus>,
}

/// Auctions the caller has bid on.
#[tracing::instrument(skip(req, store), fields(username = tracing::field::Empty))]
#[get("/auctions/me")]
pub async fn my_auctions(
    req: HttpRequest,
    params: web::Query<MyAuctionParams>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    check_failure(&store, Endpoint::MyAuctions)?;
    let username = authenticated_user(&req, &store)?;
    let history = store
        .bid_history(&username)
        .into_iter()
        .filter(|entry| {
            params
                .status
                .is_none_or(|status| entry.auction.status == status)
        })
        .collect();
    let query = page_query(params.page, params.limit);
    Ok(HttpResponse::Ok().json(paginate(history, query)))
}
