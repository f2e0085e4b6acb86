use payloads::{query::QueryKey, responses::ActiveEvent, services};
use yew::prelude::*;

use super::{FetchHookReturn, use_query};
use crate::get_api_client;

/// The running event; fetched as `None` when there is none.
#[hook]
pub fn use_active_event() -> FetchHookReturn<Option<ActiveEvent>> {
    use_query(QueryKey::bare("active-event"), || async move {
        services::get_active_event(&get_api_client()).await
    })
}
