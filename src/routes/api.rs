use actix_identity::Identity;
use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use serde::Serialize;
use serde_json::json;

use crate::domain::admin::AdminProfile;
use crate::forms::auth::LoginForm;
use crate::forms::submissions::SubmissionForm;
use crate::repository::DieselRepository;
use crate::services::submissions::{self, SubmissionsQuery};
use crate::services::{ServiceError, auth as auth_service};

/// Envelope returned by the login endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Answer malformed JSON bodies with the same `{error, details}` envelope the
/// handlers use; without this actix falls back to a plain-text 400.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = json!({
        "error": "Données invalides",
        "details": { "body": [err.to_string()] },
    });
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

/// Same envelope for malformed query strings (for example `?page=abc`).
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = json!({
        "error": "Données invalides",
        "details": { "query": [err.to_string()] },
    });
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

#[post("/api/admin")]
/// Credential check; on success the admin profile (sans password) is
/// returned and a signed session cookie is issued.
pub async fn api_login(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    payload: web::Json<LoginForm>,
) -> impl Responder {
    match auth_service::login(repo.get_ref(), &payload) {
        Ok(profile) => {
            if let Err(err) = Identity::login(&req.extensions(), profile.id.to_string()) {
                log::error!("Failed to establish admin session: {err}");
                return HttpResponse::InternalServerError()
                    .json(ApiResponse::<AdminProfile>::failure("Internal server error"));
            }
            HttpResponse::Ok().json(ApiResponse {
                success: true,
                message: "Logged in successfully".to_string(),
                data: Some(profile),
            })
        }
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(ApiResponse::<AdminProfile>::failure(message))
        }
        // Unknown email and wrong password answer identically.
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized()
            .json(ApiResponse::<AdminProfile>::failure("Invalid credentials")),
        Err(err) => {
            log::error!("Login failed: {err}");
            HttpResponse::InternalServerError()
                .json(ApiResponse::<AdminProfile>::failure("Internal server error"))
        }
    }
}

#[post("/api/soumissions")]
pub async fn api_create_submission(
    repo: web::Data<DieselRepository>,
    payload: web::Json<SubmissionForm>,
) -> impl Responder {
    match submissions::create_submission(repo.get_ref(), payload.into_inner()) {
        Ok(created) => HttpResponse::Created().json(json!({
            "message": "Soumission créée avec succès",
            "submissionId": created.id,
        })),
        Err(ServiceError::Validation(details)) => HttpResponse::BadRequest().json(json!({
            "error": "Données invalides",
            "details": details,
        })),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().json(json!({
            "error": "Produit non trouvé",
        })),
        Err(err) => {
            log::error!("Failed to create submission: {err}");
            HttpResponse::InternalServerError().json(json!({
                "error": "Erreur serveur interne",
            }))
        }
    }
}

#[get("/api/soumissions")]
/// Paginated submissions list for the dashboard; requires an admin session.
pub async fn api_list_submissions(
    user: Option<Identity>,
    params: web::Query<SubmissionsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if user.is_none() {
        return HttpResponse::Unauthorized().json(json!({
            "error": "Authentification requise",
        }));
    }

    match submissions::list_submissions(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => {
            log::error!("Failed to list submissions: {err}");
            HttpResponse::InternalServerError().json(json!({
                "error": "Erreur serveur interne",
            }))
        }
    }
}
