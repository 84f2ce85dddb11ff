use actix_web::{HttpResponse, Responder, get, web};

use crate::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::services::seo;

#[get("/sitemap.xml")]
pub async fn sitemap_xml(
    repo: web::Data<DieselRepository>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    match seo::build_sitemap(repo.get_ref(), &config.base_url) {
        Ok(xml) => HttpResponse::Ok()
            .content_type("application/xml; charset=utf-8")
            .body(xml),
        Err(err) => {
            log::error!("Failed to build the sitemap: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/robots.txt")]
pub async fn robots_txt(config: web::Data<ServerConfig>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(seo::build_robots(&config.base_url))
}
