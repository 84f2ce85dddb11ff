use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::ServiceError;
use crate::services::blog::{self, BlogQuery};

#[get("/blog")]
pub async fn show_blog(
    params: web::Query<BlogQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match blog::load_blog_page(repo.get_ref(), params.into_inner()) {
        Ok(posts) => {
            let mut context = base_context(&flash_messages, "blog");
            context.insert("posts", &posts);
            render_template(&tera, "blog/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list blog posts: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/blog/{slug}")]
pub async fn show_blog_post(
    slug: web::Path<String>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match blog::load_blog_post_page(repo.get_ref(), &slug) {
        Ok(post) => {
            let mut context = base_context(&flash_messages, "blog");
            context.insert("post", &post);
            render_template(&tera, "blog/detail.html", &context)
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to load blog post {slug}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
