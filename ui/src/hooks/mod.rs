pub mod use_active_event;
pub mod use_auctions;
pub mod use_gallery;
pub mod use_general_rules;
pub mod use_my_auctions;
pub mod use_query;
pub mod use_title;
pub mod use_wishlist;

pub use use_active_event::use_active_event;
pub use use_auctions::use_auctions;
#[cfg(target_arch = "wasm32")]
pub use use_gallery::hydrate_gallery;
pub use use_gallery::use_gallery;
pub use use_general_rules::use_general_rules;
pub use use_my_auctions::use_my_auctions;
pub use use_query::{FetchHookReturn, use_query, use_query_with_stale_time};
pub use use_title::use_title;
pub use use_wishlist::{WishlistActions, use_wishlist, use_wishlist_actions};

/// Distinguishes "not fetched yet" from "fetched, possibly empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Fetched(value) => Some(value),
            Self::NotFetched => None,
        }
    }
}
