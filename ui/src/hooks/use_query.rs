use jiff::{SignedDuration, Timestamp};
use payloads::{
    ServiceError,
    query::{DEFAULT_STALE_TIME, QueryKey},
};
use serde::{Serialize, de::DeserializeOwned};
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::*;

use super::FetchState;
use crate::State;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    /// Error of the last fetch. Stale data, if any, is still in `data`.
    pub error: Option<ServiceError>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// - No data + loading: "Memuat {context}..."
    /// - No data + error: the error message
    /// - Has data: `render_fn(data, is_loading)`, where `is_loading` means
    ///   a background revalidation is running
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool) -> Html,
    {
        match self.data.as_ref() {
            None => {
                if let Some(error) = &self.error {
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {&error.message}
                            </p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Memuat {}...", context)}
                            </p>
                        </div>
                    }
                }
            }
            Some(data) => render_fn(data, self.is_loading),
        }
    }
}

/// Fetch hook backed by the global query cache.
///
/// Cached data for `key` is returned immediately, fresh or stale. A fetch
/// starts on mount (and when `key` changes) unless a fresh entry exists or
/// a request for the same key is already in flight, so components sharing
/// a key share one request and one result.
///
/// # Example
///
/// ```ignore
/// #[hook]
/// pub fn use_general_rules() -> FetchHookReturn<Vec<GeneralRule>> {
///     use_query(QueryKey::bare("general-rules"), || async move {
///         services::get_general_rules(&get_api_client()).await
///     })
/// }
/// ```
#[hook]
pub fn use_query<T, F, Fut>(key: QueryKey, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + Serialize + DeserializeOwned + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ServiceError>> + 'static,
{
    use_query_with_stale_time(key, DEFAULT_STALE_TIME, fetch_fn)
}

/// [`use_query`] with its own staleness window.
#[hook]
pub fn use_query_with_stale_time<T, F, Fut>(
    key: QueryKey,
    stale_time: SignedDuration,
    fetch_fn: F,
) -> FetchHookReturn<T>
where
    T: Clone + Serialize + DeserializeOwned + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ServiceError>> + 'static,
{
    let (state, dispatch) = use_store::<State>();

    let refetch = {
        let dispatch = dispatch.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(key.clone(), move |_, key| {
            let dispatch = dispatch.clone();
            let fetch_fn = fetch_fn.clone();
            let key = key.clone();

            let mut started = false;
            dispatch.reduce_mut(|s| started = s.queries.begin_fetch(key.clone()));
            if !started {
                return;
            }

            yew::platform::spawn_local(async move {
                match fetch_fn().await {
                    Ok(result) => {
                        dispatch.reduce_mut(|s| {
                            s.queries.insert(key, &result, Timestamp::now())
                        });
                    }
                    Err(e) => {
                        dispatch.reduce_mut(|s| s.queries.fetch_failed(&key, e));
                    }
                }
            });
        })
    };

    let cached =
        state
            .queries
            .get::<T>(&key, Timestamp::now(), stale_time);
    let data = match cached {
        Some(cached) => FetchState::Fetched(cached.value),
        None => FetchState::NotFetched,
    };

    // Auto-fetch on mount, when the key changes, and when the entry is
    // invalidated
    {
        let refetch = refetch.clone();
        let state = state.clone();

        use_effect_with((key.clone(), data.is_fetched()), move |(key, _)| {
            if state
                .queries
                .should_fetch(key, Timestamp::now(), stale_time)
            {
                refetch.emit(());
            }
        });
    }

    // Shared per key, so hooks that joined another hook's fetch see its
    // failure too
    let error = state.queries.error(&key).cloned();
    let is_loading = state.queries.is_fetching(&key)
        || (!data.is_fetched() && error.is_none());

    FetchHookReturn {
        data,
        is_loading,
        error,
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
