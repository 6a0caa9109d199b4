use crate::configuration::Settings;
use crate::db;
use crate::helpers::HtmlResponse;
use crate::routes::admin::{ensure_admin, AdminQuery};
use crate::services::PageRenderer;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::SqlitePool;

#[tracing::instrument(name = "Admin edit listing form.", skip(renderer))]
#[get("/edit")]
pub async fn edit_handler(
    query: web::Query<AdminQuery>,
    db_pool: web::Data<SqlitePool>,
    settings: web::Data<Settings>,
    renderer: web::Data<PageRenderer>,
) -> Result<impl Responder> {
    ensure_admin(&settings, &query)?;

    let id = query.id.clone().unwrap_or_default();
    let listing = db::listing::fetch(db_pool.get_ref(), &id)
        .await
        .map_err(|_err| HtmlResponse::internal_server_error(""))
        .and_then(|listing| match listing {
            Some(listing) => Ok(listing),
            None => Err(HtmlResponse::not_found("Not found")),
        })?;

    let prefill = views::listing::Form::from(listing);
    renderer
        .admin_edit(&settings.admin_key, &prefill)
        .map(HtmlResponse::ok)
        .map_err(|err| {
            tracing::error!("Failed to render admin edit page: {:?}", err);
            HtmlResponse::internal_server_error("")
        })
}
