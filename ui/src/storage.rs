//! Browser storage access: the persisted auth token and data embedded in
//! the page at build time.

use payloads::{TokenStore, token::AUTH_TOKEN_KEY};
use secrecy::SecretString;
use serde::de::DeserializeOwned;

/// Reads the token from `localStorage` on every call, so a login or logout
/// in another tab takes effect on the next request.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn token(&self) -> Option<SecretString> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let token = storage.get_item(AUTH_TOKEN_KEY).ok()??;
        Some(SecretString::from(token))
    }
}

/// Parse the JSON content of `<script id="{id}">`, if the page has one.
pub fn read_embedded_json<T: DeserializeOwned>(id: &str) -> Option<T> {
    let document = web_sys::window()?.document()?;
    let text = document.get_element_by_id(id)?.text_content()?;
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring malformed #{id} data: {e}");
            None
        }
    }
}

/// The current query string, including the leading `?`.
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}
