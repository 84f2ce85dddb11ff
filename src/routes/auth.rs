use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::auth::LoginForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::submissions::{self, SubmissionsQuery};
use crate::services::{ServiceError, auth as auth_service};

#[get("/admin")]
pub async fn show_login(
    user: Option<Identity>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if user.is_some() {
        return redirect("/admin/dashboard");
    }
    let context = base_context(&flash_messages, "admin");
    render_template(&tera, "auth/login.html", &context)
}

#[post("/admin/login")]
pub async fn login(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    match auth_service::login(repo.get_ref(), &form) {
        Ok(profile) => {
            if let Err(err) = Identity::login(&req.extensions(), profile.id.to_string()) {
                log::error!("Failed to establish admin session: {err}");
                return HttpResponse::InternalServerError().finish();
            }
            redirect("/admin/dashboard")
        }
        Err(ServiceError::Unauthorized) | Err(ServiceError::Form(_)) => {
            FlashMessage::error("Identifiants invalides.").send();
            redirect("/admin")
        }
        Err(err) => {
            log::error!("Login failed: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/admin/logout")]
pub async fn logout(user: Option<Identity>) -> impl Responder {
    if let Some(user) = user {
        user.logout();
    }
    redirect("/admin")
}

/// Submissions table; the session established at login is checked on every
/// request, an anonymous visitor is sent back to the login page.
#[get("/admin/dashboard")]
pub async fn show_dashboard(
    user: Option<Identity>,
    params: web::Query<SubmissionsQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if user.is_none() {
        return redirect("/admin");
    }

    match submissions::list_submissions(repo.get_ref(), params.into_inner()) {
        Ok(page) => {
            let mut context = base_context(&flash_messages, "dashboard");
            context.insert("submissions", &page.submissions);
            context.insert("pagination", &page.pagination);
            render_template(&tera, "auth/dashboard.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the dashboard: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
