use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::HtmlResponse;
use crate::routes::admin::{admin_location, ensure_admin, AdminQuery};
use actix_web::{post, web, Responder, Result};
use sqlx::SqlitePool;

#[tracing::instrument(name = "Admin create listing.")]
#[post("/create")]
pub async fn create_handler(
    query: web::Query<AdminQuery>,
    form: web::Form<forms::ListingForm>,
    db_pool: web::Data<SqlitePool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    ensure_admin(&settings, &query)?;

    let listing = form.into_inner().into_new_listing();
    let listing = db::listing::insert(db_pool.get_ref(), listing)
        .await
        .map_err(|_err| HtmlResponse::internal_server_error(""))?;

    tracing::info!("New listing {} has been saved to database", listing.id);
    Ok(HtmlResponse::see_other(admin_location(&settings.admin_key)))
}
