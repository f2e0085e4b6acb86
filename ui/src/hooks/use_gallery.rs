use payloads::{
    query::QueryKey,
    requests::GalleryQuery,
    responses::{GalleryItem, InitialData, Page},
    services,
    site::INITIAL_DATA_ID,
};
use yew::prelude::*;
use yewdux::prelude::*;

use super::{FetchHookReturn, use_query};
use crate::{State, get_api_client, storage::read_embedded_json};

fn gallery_key(query: &GalleryQuery) -> QueryKey {
    QueryKey::new("gallery", query)
}

#[hook]
pub fn use_gallery(query: GalleryQuery) -> FetchHookReturn<Page<GalleryItem>> {
    let key = gallery_key(&query);
    use_query(key, move || {
        let query = query.clone();
        async move { services::get_gallery(&get_api_client(), &query).await }
    })
}

/// Seed the cache with the gallery page embedded at build time. The entry
/// counts as fetched when it was generated, so it is only refetched once
/// it falls outside the staleness window.
///
/// Must run before the app renders so the first gallery render sees it.
#[cfg(target_arch = "wasm32")]
pub fn hydrate_gallery() {
    let Some(initial) =
        read_embedded_json::<InitialData<Page<GalleryItem>>>(INITIAL_DATA_ID)
    else {
        return;
    };
    tracing::debug!(generated_at = %initial.generated_at, "Hydrating gallery");
    Dispatch::<State>::global().reduce_mut(|state| {
        state.queries.hydrate(
            gallery_key(&GalleryQuery::default()),
            &initial.data,
            initial.generated_at,
        )
    });
}
