mod create;
mod delete;
mod edit;
mod list;
mod update;

pub use create::*;
pub use delete::*;
pub use edit::*;
pub use list::*;
pub use update::*;

use crate::configuration::Settings;
use crate::helpers::HtmlResponse;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct AdminQuery {
    pub(crate) key: Option<String>,
    pub(crate) id: Option<String>,
}

/// Shared-secret gate in front of every admin operation. Plain equality
/// against the configured key; an unset key never matches anything.
pub(crate) fn ensure_admin(settings: &Settings, query: &AdminQuery) -> Result<(), actix_web::Error> {
    let supplied = query.key.as_deref().unwrap_or_default();
    if settings.admin_key.is_empty() || supplied != settings.admin_key {
        return Err(HtmlResponse::unauthorized(
            "Unauthorized. Append ?key=YOUR_ADMIN_KEY to the URL.",
        ));
    }

    Ok(())
}

/// Where every admin mutation redirects back to, key included.
pub(crate) fn admin_location(admin_key: &str) -> String {
    format!("/admin?key={}", urlencoding::encode(admin_key))
}
