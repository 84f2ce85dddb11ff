use actix_web::HttpResponse;
use actix_web::http::header::LOCATION;
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::SITE_NAME;

pub mod api;
pub mod auth;
pub mod blog;
pub mod main;
pub mod products;
pub mod seo;
pub mod submissions;

/// Build the context shared by every page template: flash messages and the
/// marker for the active navigation entry.
pub fn base_context(flash_messages: &IncomingFlashMessages, active_page: &str) -> tera::Context {
    let mut context = tera::Context::new();
    let alerts: Vec<(String, String)> = flash_messages
        .iter()
        .map(|message| (message.level().to_string(), message.content().to_string()))
        .collect();
    context.insert("alerts", &alerts);
    context.insert("active_page", active_page);
    context.insert("site_name", SITE_NAME);
    context
}

/// Render a tera template to an HTML response, degrading to a 500 when the
/// template fails.
pub fn render_template(tera: &Tera, name: &str, context: &tera::Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {name}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// 303 redirect to `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}
