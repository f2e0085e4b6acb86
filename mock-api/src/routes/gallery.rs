use actix_web::{HttpResponse, get, web};
use serde::Deserialize;

use super::{APIError, check_failure, page_query, paginate};
use crate::store::{Endpoint, Store};

#[derive(Debug, Deserialize)]
pub struct GalleryParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub variety: Option<String>,
}

#[tracing::instrument(skip(store))]
#[get("/gallery")]
pub async fn list_gallery(
    params: web::Query<GalleryParams>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    check_failure(&store, Endpoint::Gallery)?;
    let items = store
        .gallery()
        .into_iter()
        .filter(|item| {
            params
                .variety
                .as_deref()
                .is_none_or(|v| item.variety.eq_ignore_ascii_case(v))
        })
        .collect();
    let query = page_query(params.page, params.limit);
    Ok(HttpResponse::Ok().json(paginate(items, query)))
}
