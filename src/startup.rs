use crate::configuration::Settings;
use crate::routes;
use crate::services::PageRenderer;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use sqlx::SqlitePool;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    db_pool: SqlitePool,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let renderer = PageRenderer::new()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let renderer = web::Data::new(renderer);

    let settings = web::Data::new(settings);
    let db_pool = web::Data::new(db_pool);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .service(routes::health_check)
            .service(routes::catalog::index_handler)
            .service(routes::checkout::checkout_handler)
            .service(routes::legal::terms_handler)
            .service(routes::legal::privacy_handler)
            .service(
                web::scope("/admin")
                    .service(routes::admin::list_handler)
                    .service(routes::admin::create_handler)
                    .service(routes::admin::edit_handler)
                    .service(routes::admin::update_handler)
                    .service(routes::admin::delete_handler),
            )
            .app_data(db_pool.clone())
            .app_data(settings.clone())
            .app_data(renderer.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
