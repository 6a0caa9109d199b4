use crate::configuration::Settings;
use crate::db;
use crate::helpers::HtmlResponse;
use crate::routes::admin::{admin_location, ensure_admin, AdminQuery};
use actix_web::{get, web, Responder, Result};
use sqlx::SqlitePool;

/// Hard delete, triggered from a confirmation prompt in the admin table.
/// Deleting an id that no longer exists is a no-op.
#[tracing::instrument(name = "Admin delete listing.")]
#[get("/delete")]
pub async fn delete_handler(
    query: web::Query<AdminQuery>,
    db_pool: web::Data<SqlitePool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    ensure_admin(&settings, &query)?;

    let id = query.id.clone().unwrap_or_default();
    db::listing::delete(db_pool.get_ref(), &id)
        .await
        .map_err(|_err| HtmlResponse::internal_server_error(""))?;

    Ok(HtmlResponse::see_other(admin_location(&settings.admin_key)))
}
