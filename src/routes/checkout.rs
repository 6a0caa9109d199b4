use crate::db;
use crate::helpers::HtmlResponse;
use crate::models;
use crate::services::PageRenderer;
use crate::views;
use actix_web::{get, web, Responder, Result};
use serde::Deserialize;
use sqlx::SqlitePool;

#[derive(Debug, Deserialize)]
pub struct CheckoutQuery {
    pub id: Option<String>,
}

/// Fee summary for a single LIVE listing. Never mutates storage; the actual
/// payment happens on the seller's external processor page.
#[tracing::instrument(name = "Checkout summary.", skip(renderer))]
#[get("/checkout")]
pub async fn checkout_handler(
    query: web::Query<CheckoutQuery>,
    db_pool: web::Data<SqlitePool>,
    renderer: web::Data<PageRenderer>,
) -> Result<impl Responder> {
    let id = query.id.clone().unwrap_or_default();
    let listing = db::listing::fetch(db_pool.get_ref(), &id)
        .await
        .map_err(|_err| HtmlResponse::internal_server_error(""))
        .and_then(|listing| match listing {
            Some(listing) if listing.status == models::Status::Live => Ok(listing),
            // Draft and closed listings are invisible to buyers
            _ => Err(HtmlResponse::not_found("Listing not found.")),
        })?;

    let summary = views::listing::Checkout::from(listing);
    renderer
        .checkout(&summary)
        .map(HtmlResponse::ok)
        .map_err(|err| {
            tracing::error!("Failed to render checkout page: {:?}", err);
            HtmlResponse::internal_server_error("")
        })
}
