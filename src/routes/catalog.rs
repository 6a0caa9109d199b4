use crate::configuration::Settings;
use crate::db;
use crate::helpers::HtmlResponse;
use crate::services::PageRenderer;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::SqlitePool;

#[tracing::instrument(name = "Public catalog.", skip(renderer))]
#[get("/")]
pub async fn index_handler(
    db_pool: web::Data<SqlitePool>,
    settings: web::Data<Settings>,
    renderer: web::Data<PageRenderer>,
) -> Result<impl Responder> {
    let cards = db::listing::fetch_live(db_pool.get_ref())
        .await
        .map_err(|_err| HtmlResponse::internal_server_error(""))?
        .into_iter()
        .map(Into::into)
        .collect::<Vec<views::listing::Card>>();

    renderer
        .catalog(&settings.app_name, &cards)
        .map(HtmlResponse::ok)
        .map_err(|err| {
            tracing::error!("Failed to render catalog page: {:?}", err);
            HtmlResponse::internal_server_error("")
        })
}
