use payloads::{
    AuctionId,
    query::QueryKey,
    requests::PageQuery,
    responses::{Page, WishlistItem},
    services,
};
use yew::prelude::*;
use yewdux::prelude::*;

use super::{FetchHookReturn, use_query};
use crate::{State, contexts::toast::use_toast, get_api_client};

const WISHLIST_QUERY: &str = "wishlist";

#[hook]
pub fn use_wishlist(page: PageQuery) -> FetchHookReturn<Page<WishlistItem>> {
    let key = QueryKey::new(WISHLIST_QUERY, &page);
    use_query(key, move || async move {
        services::get_wishlist(&get_api_client(), &page).await
    })
}

#[derive(Clone)]
pub struct WishlistActions {
    pub add: Callback<AuctionId>,
    pub remove: Callback<AuctionId>,
}

/// Add/remove callbacks. Outcomes are reported as toasts and every cached
/// wishlist page is dropped so lists refetch.
#[hook]
pub fn use_wishlist_actions() -> WishlistActions {
    let (_, dispatch) = use_store::<State>();
    let toast = use_toast();

    let add = {
        let dispatch = dispatch.clone();
        let toast = toast.clone();
        Callback::from(move |auction_id: AuctionId| {
            let dispatch = dispatch.clone();
            let toast = toast.clone();
            yew::platform::spawn_local(async move {
                match services::add_to_wishlist(&get_api_client(), auction_id)
                    .await
                {
                    Ok(_) => {
                        dispatch.reduce_mut(|s| s.queries.invalidate(WISHLIST_QUERY));
                        toast.success("Ditambahkan ke wishlist");
                    }
                    Err(e) => toast.service_error(&e),
                }
            });
        })
    };

    let remove = Callback::from(move |auction_id: AuctionId| {
        let dispatch = dispatch.clone();
        let toast = toast.clone();
        yew::platform::spawn_local(async move {
            match services::remove_from_wishlist(&get_api_client(), auction_id)
                .await
            {
                Ok(response) => {
                    dispatch.reduce_mut(|s| s.queries.invalidate(WISHLIST_QUERY));
                    toast.success(response.message);
                }
                Err(e) => toast.service_error(&e),
            }
        });
    });

    WishlistActions { add, remove }
}
