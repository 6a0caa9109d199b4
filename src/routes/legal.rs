use crate::configuration::Settings;
use crate::helpers::HtmlResponse;
use crate::services::PageRenderer;
use actix_web::{get, web, Responder, Result};

#[tracing::instrument(name = "Terms of use.", skip(renderer))]
#[get("/terms")]
pub async fn terms_handler(
    settings: web::Data<Settings>,
    renderer: web::Data<PageRenderer>,
) -> Result<impl Responder> {
    renderer
        .terms(&settings.app_name)
        .map(HtmlResponse::ok)
        .map_err(|err| {
            tracing::error!("Failed to render terms page: {:?}", err);
            HtmlResponse::internal_server_error("")
        })
}

#[tracing::instrument(name = "Privacy policy.", skip(renderer))]
#[get("/privacy")]
pub async fn privacy_handler(
    settings: web::Data<Settings>,
    renderer: web::Data<PageRenderer>,
) -> Result<impl Responder> {
    renderer
        .privacy(&settings.app_name)
        .map(HtmlResponse::ok)
        .map_err(|err| {
            tracing::error!("Failed to render privacy page: {:?}", err);
            HtmlResponse::internal_server_error("")
        })
}
