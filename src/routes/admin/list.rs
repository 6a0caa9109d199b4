use crate::configuration::Settings;
use crate::db;
use crate::helpers::HtmlResponse;
use crate::routes::admin::{ensure_admin, AdminQuery};
use crate::services::PageRenderer;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::SqlitePool;

/// All listings regardless of status, newest first, plus the create form.
#[tracing::instrument(name = "Admin list listings.", skip(renderer))]
#[get("")]
pub async fn list_handler(
    query: web::Query<AdminQuery>,
    db_pool: web::Data<SqlitePool>,
    settings: web::Data<Settings>,
    renderer: web::Data<PageRenderer>,
) -> Result<impl Responder> {
    ensure_admin(&settings, &query)?;

    let rows = db::listing::fetch_all(db_pool.get_ref())
        .await
        .map_err(|_err| HtmlResponse::internal_server_error(""))?
        .into_iter()
        .map(Into::into)
        .collect::<Vec<views::listing::Row>>();

    renderer
        .admin_list(&settings.app_name, &settings.admin_key, &rows)
        .map(HtmlResponse::ok)
        .map_err(|err| {
            tracing::error!("Failed to render admin list page: {:?}", err);
            HtmlResponse::internal_server_error("")
        })
}
