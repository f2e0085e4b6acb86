use payloads::{
    query::QueryKey,
    requests::MyAuctionQuery,
    responses::{MyAuction, Page},
    services,
};
use yew::prelude::*;

use super::{FetchHookReturn, use_query};
use crate::get_api_client;

/// The logged in user's auction history. Pagination and the status filter
/// come from the caller; each combination is cached separately.
#[hook]
pub fn use_my_auctions(
    query: MyAuctionQuery,
) -> FetchHookReturn<Page<MyAuction>> {
    let key = QueryKey::new("my-auctions", &query);
    use_query(key, move || {
        let query = query.clone();
        async move { services::get_my_auctions(&get_api_client(), &query).await }
    })
}
