use cosmopharma_site::domain::admin::NewAdmin;
use cosmopharma_site::domain::product::NewProduct;
use cosmopharma_site::domain::submission::{SubmissionListQuery, SubmissionStatus};
use cosmopharma_site::forms::auth::LoginForm;
use cosmopharma_site::forms::submissions::SubmissionForm;
use cosmopharma_site::repository::{
    AdminWriter, DieselRepository, ProductWriter, SubmissionReader,
};
use cosmopharma_site::services::submissions::{self, SubmissionsQuery};
use cosmopharma_site::services::{ServiceError, auth};

mod common;

fn submission_payload(product_id: i32) -> SubmissionForm {
    serde_json::from_value(serde_json::json!({
        "supplier": "Pacific Marine Resources Ltd",
        "email": "contact@pacificmarine.com",
        "productId": product_id,
        "quantity": "500kg",
        "origin": "Australie",
        "message": "Fournisseur certifié avec 15 ans d'expérience.",
        "acceptTerms": true
    }))
    .expect("deserialization")
}

#[test]
fn create_submission_persists_a_pending_row() {
    let test_db = common::TestDb::new("service_create_submission_persists.db");
    let repo = DieselRepository::new(test_db.pool());

    let product = repo
        .create_product(&NewProduct::new("Holothuria Scabra", "holothuria-scabra", "<p>A</p>"))
        .expect("create product");

    let created = submissions::create_submission(&repo, submission_payload(product.id))
        .expect("expected submission creation to succeed");
    assert_eq!(created.status, SubmissionStatus::Pending);

    let (total, items) = repo
        .list_submissions(SubmissionListQuery::new())
        .expect("list submissions");
    assert_eq!(total, 1);
    assert_eq!(items[0].id, created.id);
    assert_eq!(items[0].status, SubmissionStatus::Pending);
}

#[test]
fn create_submission_rejects_unknown_product() {
    let test_db = common::TestDb::new("service_create_submission_unknown_product.db");
    let repo = DieselRepository::new(test_db.pool());

    let result = submissions::create_submission(&repo, submission_payload(999));
    assert!(matches!(result, Err(ServiceError::NotFound)));

    let (total, _) = repo
        .list_submissions(SubmissionListQuery::new())
        .expect("list submissions");
    assert_eq!(total, 0);
}

#[test]
fn list_submissions_paginates_newest_first() {
    let test_db = common::TestDb::new("service_list_submissions_paginates.db");
    let repo = DieselRepository::new(test_db.pool());

    let product = repo
        .create_product(&NewProduct::new("Holothuria Scabra", "holothuria-scabra", "<p>A</p>"))
        .expect("create product");

    for i in 0..5 {
        let mut form = submission_payload(product.id);
        form.supplier = format!("Supplier {i}");
        submissions::create_submission(&repo, form).expect("create submission");
    }

    let page = submissions::list_submissions(
        &repo,
        SubmissionsQuery {
            status: None,
            page: Some(2),
            limit: Some(2),
        },
    )
    .expect("list submissions");

    assert_eq!(page.submissions.len(), 2);
    assert_eq!(page.pagination.page, 2);
    assert_eq!(page.pagination.limit, 2);
    assert_eq!(page.pagination.total, 5);
    assert_eq!(page.pagination.pages, 3);
}

#[test]
fn login_accepts_the_seeded_credentials_only() {
    let test_db = common::TestDb::new("service_login_credentials.db");
    let repo = DieselRepository::new(test_db.pool());

    let hash = bcrypt::hash("admin1", 4).expect("hash");
    repo.create_admin(&NewAdmin::new(
        "admin1",
        "admin1@cosmopharmal-industry.com",
        hash,
    ))
    .expect("create admin");

    let profile = auth::login(
        &repo,
        &LoginForm {
            email: "admin1@cosmopharmal-industry.com".to_string(),
            password: "admin1".to_string(),
        },
    )
    .expect("expected login to succeed");
    assert_eq!(profile.email, "admin1@cosmopharmal-industry.com");

    let wrong_password = auth::login(
        &repo,
        &LoginForm {
            email: "admin1@cosmopharmal-industry.com".to_string(),
            password: "nope42".to_string(),
        },
    );
    assert!(matches!(wrong_password, Err(ServiceError::Unauthorized)));

    let unknown_email = auth::login(
        &repo,
        &LoginForm {
            email: "nobody@cosmopharmal-industry.com".to_string(),
            password: "admin1".to_string(),
        },
    );
    assert!(matches!(unknown_email, Err(ServiceError::Unauthorized)));
}
