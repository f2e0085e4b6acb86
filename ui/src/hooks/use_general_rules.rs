use jiff::SignedDuration;
use payloads::{query::QueryKey, responses::GeneralRule, services};
use yew::prelude::*;

use super::{FetchHookReturn, use_query_with_stale_time};
use crate::get_api_client;

/// General auction rules, ordered by position. They rarely change, so they
/// stay fresh for five minutes.
#[hook]
pub fn use_general_rules() -> FetchHookReturn<Vec<GeneralRule>> {
    use_query_with_stale_time(
        QueryKey::bare("general-rules"),
        SignedDuration::from_mins(5),
        || async move { services::get_general_rules(&get_api_client()).await },
    )
}
