use payloads::query::QueryCache;
use yewdux::prelude::*;

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    /// Responses of every data hook, keyed by query.
    pub queries: QueryCache,
}
