use payloads::{
    query::QueryKey,
    requests::AuctionQuery,
    responses::{AuctionSummary, Page},
    services,
};
use yew::prelude::*;

use super::{FetchHookReturn, use_query};
use crate::get_api_client;

#[hook]
pub fn use_auctions(query: AuctionQuery) -> FetchHookReturn<Page<AuctionSummary>> {
    let key = QueryKey::new("auctions", &query);
    use_query(key, move || {
        let query = query.clone();
        async move { services::get_auctions(&get_api_client(), &query).await }
    })
}
