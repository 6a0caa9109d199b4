use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers::HtmlResponse;
use crate::routes::admin::{admin_location, ensure_admin, AdminQuery};
use actix_web::{post, web, Responder, Result};
use sqlx::SqlitePool;

/// Full-row replace. `id` and `created_at` survive; every other field is
/// taken from the submitted form. An unknown id replaces no row.
#[tracing::instrument(name = "Admin update listing.")]
#[post("/update")]
pub async fn update_handler(
    query: web::Query<AdminQuery>,
    form: web::Form<forms::ListingForm>,
    db_pool: web::Data<SqlitePool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    ensure_admin(&settings, &query)?;

    let form = form.into_inner();
    let id = form.id.clone().unwrap_or_default();
    let existing = db::listing::fetch(db_pool.get_ref(), &id)
        .await
        .map_err(|_err| HtmlResponse::internal_server_error(""))?;

    if let Some(mut listing) = existing {
        form.apply(&mut listing);
        db::listing::update(db_pool.get_ref(), listing)
            .await
            .map_err(|_err| HtmlResponse::internal_server_error(""))?;
    }

    Ok(HtmlResponse::see_other(admin_location(&settings.admin_key)))
}
