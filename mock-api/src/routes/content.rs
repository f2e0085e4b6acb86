use actix_web::{HttpResponse, get, web};
use payloads::responses::Envelope;

use super::{APIError, check_failure};
use crate::store::{Endpoint, Store};

#[tracing::instrument(skip(store))]
#[get("/general-rules")]
pub async fn general_rules(
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    check_failure(&store, Endpoint::GeneralRules)?;
    Ok(HttpResponse::Ok().json(Envelope::new(store.general_rules())))
}

/// `data` is null while no event is running.
#[tracing::instrument(skip(store))]
#[get("/event/active")]
pub async fn active_event(
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    check_failure(&store, Endpoint::ActiveEvent)?;
    Ok(HttpResponse::Ok().json(Envelope::new(store.active_event())))
}
