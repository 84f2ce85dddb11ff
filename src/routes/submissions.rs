use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::product::ProductListQuery;
use crate::repository::{DieselRepository, ProductReader};
use crate::routes::{base_context, render_template};

/// Public supplier form; the page needs the active products for its select
/// box, the submit itself goes to `POST /api/soumissions`.
#[get("/soumissions")]
pub async fn show_submission_form(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match repo.list_products(ProductListQuery::new()) {
        Ok((_, products)) => {
            let mut context = base_context(&flash_messages, "soumissions");
            context.insert("products", &products);
            render_template(&tera, "submissions/form.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the submission form: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
