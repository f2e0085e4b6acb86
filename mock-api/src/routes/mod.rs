pub mod auction;
pub mod content;
pub mod gallery;
pub mod wishlist;

use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{
    HttpRequest, HttpResponse, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, web,
};
use payloads::{
    ErrorCode,
    requests::{DEFAULT_PAGE_LIMIT, PageQuery},
    responses::{ErrorBody, Page, PageMeta},
};
use serde::Deserialize;

use crate::store::{Endpoint, Failure, Store, StoreError};

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("")
        .service(health_check)
        .service(content::general_rules)
        .service(content::active_event)
        .service(auction::my_auctions)
        .service(auction::list_auctions)
        .service(gallery::list_gallery)
        .service(wishlist::list_wishlist)
        .service(wishlist::add_to_wishlist)
        .service(wishlist::remove_from_wishlist)
}

#[get("/health_check")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("healthy")
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Unauthorized: please login to continue")]
    Unauthorized,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    AlreadyExists(String),
    #[error("{0}")]
    AuctionEnded(String),
    /// A failure injected through [`Store::fail`].
    #[error("injected failure ({})", .0.status)]
    Injected(Failure),
}

impl APIError {
    fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Unauthorized => Some(ErrorCode::Unauthorized),
            Self::NotFound(_) => Some(ErrorCode::NotFound),
            Self::AlreadyExists(_) => Some(ErrorCode::AlreadyExists),
            Self::AuctionEnded(_) => Some(ErrorCode::AuctionEnded),
            Self::Injected(_) => None,
        }
    }
}

impl ResponseError for APIError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AlreadyExists(_) => StatusCode::CONFLICT,
            Self::AuctionEnded(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Injected(failure) => StatusCode::from_u16(failure.status)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            Self::Injected(failure) => {
                response.body(failure.body.clone().unwrap_or_default())
            }
            _ => response.json(ErrorBody {
                message: Some(self.to_string()),
                code: self.code().map(|code| code.as_str().to_string()),
            }),
        }
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::AuctionNotFound | StoreError::WishlistItemNotFound => {
                APIError::NotFound(e.to_string())
            }
            StoreError::AlreadyWishlisted => {
                APIError::AlreadyExists(e.to_string())
            }
            StoreError::AuctionEnded => APIError::AuctionEnded(e.to_string()),
        }
    }
}

/// Return the injected failure for an endpoint, if one is set.
fn check_failure(store: &Store, endpoint: Endpoint) -> Result<(), APIError> {
    match store.injected_failure(endpoint) {
        Some(failure) => Err(APIError::Injected(failure)),
        None => Ok(()),
    }
}

/// Resolve the bearer token on the request to a known user.
fn authenticated_user(
    req: &HttpRequest,
    store: &Store,
) -> Result<String, APIError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(APIError::Unauthorized)?;
    let username = store
        .user_for_token(token.trim())
        .ok_or(APIError::Unauthorized)?;
    // recorded on the span of the route being served
    tracing::Span::current().record("username", username.as_str());
    Ok(username)
}

/// Page parameters of list endpoints. List endpoints with filters repeat
/// these fields instead of flattening this struct, since flattened
/// url-encoded numbers don't parse.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PageParams {
    pub fn query(&self) -> PageQuery {
        page_query(self.page, self.limit)
    }
}

fn page_query(page: Option<u32>, limit: Option<u32>) -> PageQuery {
    PageQuery::new(page.unwrap_or(1), limit.unwrap_or(DEFAULT_PAGE_LIMIT))
}

/// Cut one page out of a full result list.
fn paginate<T>(items: Vec<T>, query: PageQuery) -> Page<T> {
    let total = items.len() as u64;
    let data = items
        .into_iter()
        .skip(query.offset())
        .take(query.limit as usize)
        .collect();
    Page {
        message: None,
        data,
        meta: PageMeta {
            page: query.page,
            limit: query.limit,
            total,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_slices_and_reports_totals() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(items.clone(), PageQuery::new(3, 10));
        assert_eq!(page.data, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.meta.total, 25);
        assert_eq!(page.meta.total_pages(), 3);

        let past_end = paginate(items, PageQuery::new(9, 10));
        assert!(past_end.data.is_empty());
        assert_eq!(past_end.meta.page, 9);
    }
}
