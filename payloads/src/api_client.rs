use crate::{
    AuctionId, TokenStore, requests,
    responses::{
        ActiveEvent, AuctionSummary, Envelope, GalleryItem, GeneralRule,
        MyAuction, Page, SuccessMessage, WishlistItem,
    },
};
use reqwest::{RequestBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use std::sync::Arc;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// Environment variable naming the backend origin.
pub const BACKEND_BASE_URL_ENV: &str = "NEXT_PUBLIC_BACKEND_BASE_URL";
/// Shorter name, read when [`BACKEND_BASE_URL_ENV`] is not set.
pub const BACKEND_BASE_URL_FALLBACK_ENV: &str = "BACKEND_BASE_URL";
/// Backend origin used when nothing is configured.
pub const DEFAULT_BACKEND_BASE_URL: &str = "http://localhost:1728";

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Build from an optional configured value, falling back to the local
    /// development backend when it is missing or blank.
    pub fn from_option(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BACKEND_BASE_URL),
        }
    }

    /// Build from the first non-blank of two configured values.
    pub fn from_options(primary: Option<&str>, fallback: Option<&str>) -> Self {
        let configured = primary.filter(|url| !url.trim().is_empty());
        Self::from_option(configured.or(fallback))
    }

    /// Read `NEXT_PUBLIC_BACKEND_BASE_URL`, then `BACKEND_BASE_URL`, from
    /// the process environment.
    pub fn from_env() -> Self {
        let primary = std::env::var(BACKEND_BASE_URL_ENV).ok();
        let fallback = std::env::var(BACKEND_BASE_URL_FALLBACK_ENV).ok();
        Self::from_options(primary.as_deref(), fallback.as_deref())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_BASE_URL)
    }
}

/// An API client for interfacing with the backend.
///
/// Every request goes through [`APIClient::authorize`], which attaches the
/// bearer token from the configured [`TokenStore`] when there is one.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
    pub tokens: Arc<dyn TokenStore>,
}

impl APIClient {
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            address: config.base_url.clone(),
            inner_client: reqwest::Client::new(),
            tokens,
        }
    }
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/{}", &self.address, path.trim_start_matches('/'))
    }

    /// Attach `Authorization: Bearer <token>` when a token is stored.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.bearer_token() {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    pub async fn get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));
        self.authorize(request).send().await
    }

    pub async fn get_query(
        &self,
        path: &str,
        query: &impl Serialize,
    ) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path)).query(query);
        self.authorize(request).send().await
    }

    pub async fn post(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);
        self.authorize(request).send().await
    }

    pub async fn delete(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.delete(self.format_url(path));
        self.authorize(request).send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn general_rules(&self) -> Result<Vec<GeneralRule>, ClientError> {
        let response = self.get("general-rules").await?;
        ok_data(response).await
    }

    /// The running event, or `None` when nothing is scheduled right now.
    pub async fn active_event(
        &self,
    ) -> Result<Option<ActiveEvent>, ClientError> {
        let response = self.get("event/active").await?;
        ok_data(response).await
    }

    pub async fn list_auctions(
        &self,
        query: &requests::AuctionQuery,
    ) -> Result<Page<AuctionSummary>, ClientError> {
        let response = self.get_query("auctions", query).await?;
        ok_body(response).await
    }

    /// Auctions the logged in user has bid on.
    pub async fn list_my_auctions(
        &self,
        query: &requests::MyAuctionQuery,
    ) -> Result<Page<MyAuction>, ClientError> {
        let response = self.get_query("auctions/me", query).await?;
        ok_body(response).await
    }

    pub async fn list_gallery(
        &self,
        query: &requests::GalleryQuery,
    ) -> Result<Page<GalleryItem>, ClientError> {
        let response = self.get_query("gallery", query).await?;
        ok_body(response).await
    }

    pub async fn list_wishlist(
        &self,
        query: &requests::PageQuery,
    ) -> Result<Page<WishlistItem>, ClientError> {
        let response = self.get_query("wishlist", query).await?;
        ok_body(response).await
    }

    pub async fn add_to_wishlist(
        &self,
        details: &requests::AddToWishlist,
    ) -> Result<WishlistItem, ClientError> {
        let response = self.post("wishlist", details).await?;
        ok_data(response).await
    }

    pub async fn remove_from_wishlist(
        &self,
        auction_id: &AuctionId,
    ) -> Result<SuccessMessage, ClientError> {
        let response = self.delete(&format!("wishlist/{auction_id}")).await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A non-2xx response, containing the response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Unwrap the `data` field of a successful [`Envelope`].
pub async fn ok_data<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let envelope: Envelope<T> = ok_body(response).await?;
    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_trims_and_defaults() {
        assert_eq!(
            ClientConfig::from_option(None).base_url,
            "http://localhost:1728"
        );
        assert_eq!(
            ClientConfig::from_option(Some("  ")).base_url,
            "http://localhost:1728"
        );
        assert_eq!(
            ClientConfig::from_option(Some("https://api.koi.test/")).base_url,
            "https://api.koi.test"
        );
    }

    #[test]
    fn public_variable_wins_over_fallback() {
        assert_eq!(
            ClientConfig::from_options(
                Some("https://api.koi.example"),
                Some("http://other.test")
            )
            .base_url,
            "https://api.koi.example"
        );
        assert_eq!(
            ClientConfig::from_options(Some(" "), Some("http://other.test/"))
                .base_url,
            "http://other.test"
        );
        assert_eq!(
            ClientConfig::from_options(None, None).base_url,
            "http://localhost:1728"
        );
    }

    #[test]
    fn from_env_reads_public_variable() {
        // only test in this crate touching the process environment
        unsafe {
            std::env::set_var(BACKEND_BASE_URL_ENV, "https://api.koi.example/");
        }
        assert_eq!(ClientConfig::from_env().base_url, "https://api.koi.example");
        unsafe {
            std::env::remove_var(BACKEND_BASE_URL_ENV);
        }
    }

    #[test]
    fn urls_join_without_double_slashes() {
        let client = APIClient::new(
            &ClientConfig::new("http://127.0.0.1:9000/"),
            Arc::new(crate::NoTokenStore),
        );
        assert_eq!(
            client.format_url("/event/active"),
            "http://127.0.0.1:9000/event/active"
        );
        assert_eq!(
            client.format_url("gallery"),
            "http://127.0.0.1:9000/gallery"
        );
    }
}
