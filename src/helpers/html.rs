use actix_web::http::header;
use actix_web::HttpResponse;

/// Response helpers for the server-rendered pages. Terminal failures carry a
/// short plain-text body; successes carry a fully rendered HTML document.
pub(crate) struct HtmlResponse;

impl HtmlResponse {
    pub(crate) fn ok(body: String) -> HttpResponse {
        HttpResponse::Ok()
            .content_type(header::ContentType::html())
            .body(body)
    }

    pub(crate) fn see_other(location: String) -> HttpResponse {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location))
            .finish()
    }

    pub(crate) fn not_found(message: &str) -> actix_web::Error {
        let msg = if !message.trim().is_empty() {
            message.to_string()
        } else {
            String::from("Object not found")
        };

        actix_web::error::ErrorNotFound(msg)
    }

    pub(crate) fn unauthorized(message: &str) -> actix_web::Error {
        let msg = if !message.trim().is_empty() {
            message.to_string()
        } else {
            String::from("Unauthorized")
        };

        actix_web::error::ErrorUnauthorized(msg)
    }

    pub(crate) fn internal_server_error(message: &str) -> actix_web::Error {
        let msg = if !message.trim().is_empty() {
            message.to_string()
        } else {
            String::from("Internal error")
        };

        actix_web::error::ErrorInternalServerError(msg)
    }
}
