//! Where the client finds the bearer token for outgoing requests.
//!
//! The token is written by the login flow, which lives outside this
//! workspace. Everything here only reads it.

use secrecy::{ExposeSecret, SecretString};
use std::sync::RwLock;

/// Key of the persisted token in browser storage.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Read access to the current auth token.
///
/// Implementations decide where the token lives: browser storage, memory,
/// or nowhere at all when running outside a browser.
pub trait TokenStore: Send + Sync {
    fn token(&self) -> Option<SecretString>;

    /// The token, if one is stored and it isn't blank.
    fn bearer_token(&self) -> Option<SecretString> {
        self.token()
            .filter(|token| !token.expose_secret().trim().is_empty())
    }
}

/// Token store for contexts without client storage (prerendering, tools).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTokenStore;

impl TokenStore for NoTokenStore {
    fn token(&self) -> Option<SecretString> {
        None
    }
}

/// In-memory token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<SecretString>>,
}

impl MemoryTokenStore {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(SecretString::from(token.into()))),
        }
    }

    pub fn set(&self, token: impl Into<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(SecretString::from(token.into()));
        }
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<SecretString> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_tokens_are_not_bearer_tokens() {
        let store = MemoryTokenStore::default();
        assert!(store.bearer_token().is_none());

        store.set("   ");
        assert!(store.token().is_some());
        assert!(store.bearer_token().is_none());

        store.set("abc123");
        assert_eq!(
            store.bearer_token().unwrap().expose_secret(),
            "abc123"
        );

        store.clear();
        assert!(store.bearer_token().is_none());
    }

    #[test]
    fn no_token_store_never_yields() {
        assert!(NoTokenStore.bearer_token().is_none());
    }
}
