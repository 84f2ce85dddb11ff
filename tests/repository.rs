use cosmopharma_site::domain::admin::NewAdmin;
use cosmopharma_site::domain::blog_post::{BlogPostListQuery, NewBlogPost};
use cosmopharma_site::domain::category::NewCategory;
use cosmopharma_site::domain::product::{NewProduct, ProductListQuery};
use cosmopharma_site::domain::submission::{
    NewSubmission, SubmissionListQuery, SubmissionStatus,
};
use cosmopharma_site::repository::{
    AdminReader, AdminWriter, BlogPostReader, BlogPostWriter, CategoryReader, CategoryWriter,
    DieselRepository, ProductReader, ProductWriter, SubmissionReader, SubmissionWriter,
};

mod common;

#[test]
fn test_product_repository_filters() {
    let test_db = common::TestDb::new("test_product_repository_filters.db");
    let repo = DieselRepository::new(test_db.pool());

    let scabra = repo
        .create_product(
            &NewProduct::new("Holothuria Scabra", "holothuria-scabra", "<p>Grade A</p>")
                .featured(),
        )
        .unwrap();
    let edulis = repo
        .create_product(&NewProduct::new(
            "Holothuria Edulis",
            "holothuria-edulis",
            "<p>Premium</p>",
        ))
        .unwrap();
    let hidden = repo
        .create_product(
            &NewProduct::new("Stichopus Retired", "stichopus-retired", "<p>Gone</p>").inactive(),
        )
        .unwrap();

    // Slug lookup.
    let found = repo.get_product_by_slug("holothuria-edulis").unwrap();
    assert_eq!(found.map(|p| p.id), Some(edulis.id));
    assert!(repo.get_product_by_slug("no-such-slug").unwrap().is_none());

    // Inactive products are excluded unless asked for.
    let (total, items) = repo.list_products(ProductListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert!(items.iter().all(|p| p.id != hidden.id));
    let (total_all, _) = repo
        .list_products(ProductListQuery::new().include_inactive())
        .unwrap();
    assert_eq!(total_all, 3);

    // Featured products sort first.
    assert_eq!(items[0].id, scabra.id);

    // Search matches name or description.
    let (total, items) = repo
        .list_products(ProductListQuery::new().search("edulis"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, edulis.id);
    let (total, _) = repo
        .list_products(ProductListQuery::new().search("Premium"))
        .unwrap();
    assert_eq!(total, 1);

    // Featured-only filter.
    let (total, items) = repo
        .list_products(ProductListQuery::new().featured_only())
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, scabra.id);
}

#[test]
fn test_product_category_assignment() {
    let test_db = common::TestDb::new("test_product_category_assignment.db");
    let repo = DieselRepository::new(test_db.pool());

    let dried = repo
        .create_category(&NewCategory::new("Holothurie Séchée", "holothurie-sechee"))
        .unwrap();
    let premium = repo
        .create_category(&NewCategory::new("Bêche-de-mer Premium", "beche-de-mer-premium"))
        .unwrap();

    let scabra = repo
        .create_product(&NewProduct::new("Holothuria Scabra", "holothuria-scabra", "<p>A</p>"))
        .unwrap();
    let edulis = repo
        .create_product(&NewProduct::new("Holothuria Edulis", "holothuria-edulis", "<p>B</p>"))
        .unwrap();

    repo.assign_category(scabra.id, dried.id).unwrap();
    repo.assign_category(edulis.id, premium.id).unwrap();

    let (total, items) = repo
        .list_products(ProductListQuery::new().category("holothurie-sechee"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, scabra.id);

    // Unknown category slug matches nothing.
    let (total, _) = repo
        .list_products(ProductListQuery::new().category("no-such-category"))
        .unwrap();
    assert_eq!(total, 0);

    let found = repo.get_category_by_slug("beche-de-mer-premium").unwrap();
    assert_eq!(found.map(|c| c.id), Some(premium.id));
    assert_eq!(repo.list_categories().unwrap().len(), 2);
}

#[test]
fn test_submission_round_trip_is_stored_pending() {
    let test_db = common::TestDb::new("test_submission_round_trip.db");
    let repo = DieselRepository::new(test_db.pool());

    let product = repo
        .create_product(&NewProduct::new("Holothuria Scabra", "holothuria-scabra", "<p>A</p>"))
        .unwrap();

    let created = repo
        .create_submission(
            &NewSubmission::new(
                "Pacific Marine Resources Ltd",
                "contact@pacificmarine.com",
                product.id,
                "500kg",
                "Australie",
                "Fournisseur certifié avec 15 ans d'expérience.",
            )
            .with_phone("+61 8 9123 4567")
            .with_company("Pacific Marine Resources")
            .with_certifications("MSC, ISO 22000"),
        )
        .unwrap();
    assert_eq!(created.status, SubmissionStatus::Pending);

    let fetched = repo
        .get_submission_by_id(created.id)
        .unwrap()
        .expect("expected the submission to be readable back");
    assert_eq!(fetched.supplier, "Pacific Marine Resources Ltd");
    assert_eq!(fetched.email, "contact@pacificmarine.com");
    assert_eq!(fetched.phone.as_deref(), Some("+61 8 9123 4567"));
    assert_eq!(fetched.quantity, "500kg");
    assert_eq!(fetched.status, SubmissionStatus::Pending);

    // The joined product fields come along for display.
    let product_info = fetched.product.expect("expected joined product fields");
    assert_eq!(product_info.name, "Holothuria Scabra");
    assert_eq!(product_info.slug, "holothuria-scabra");

    assert!(repo.get_submission_by_id(created.id + 100).unwrap().is_none());
}

#[test]
fn test_submission_pagination_and_status_filter() {
    let test_db = common::TestDb::new("test_submission_pagination.db");
    let repo = DieselRepository::new(test_db.pool());

    let product = repo
        .create_product(&NewProduct::new("Holothuria Scabra", "holothuria-scabra", "<p>A</p>"))
        .unwrap();

    for i in 0..5 {
        repo.create_submission(&NewSubmission::new(
            format!("Supplier {i}"),
            format!("supplier{i}@example.com"),
            product.id,
            "100kg",
            "Indonésie",
            "Production en grande quantité, livraison mensuelle possible.",
        ))
        .unwrap();
    }

    let (total, items) = repo
        .list_submissions(SubmissionListQuery::new().paginate(2, 2))
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(items.len(), 2);

    let (total, items) = repo
        .list_submissions(SubmissionListQuery::new().paginate(3, 2))
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(items.len(), 1);

    // Every stored row is PENDING, so the ACCEPTED filter matches nothing.
    let (total, _) = repo
        .list_submissions(SubmissionListQuery::new().status(SubmissionStatus::Pending))
        .unwrap();
    assert_eq!(total, 5);
    let (total, items) = repo
        .list_submissions(SubmissionListQuery::new().status(SubmissionStatus::Accepted))
        .unwrap();
    assert_eq!(total, 0);
    assert!(items.is_empty());
}

#[test]
fn test_blog_post_repository() {
    let test_db = common::TestDb::new("test_blog_post_repository.db");
    let repo = DieselRepository::new(test_db.pool());

    let now = chrono::Local::now().naive_utc();
    let published = repo
        .create_blog_post(
            &NewBlogPost::new("Guide des Holothuries", "guide-des-holothuries", "<p>...</p>")
                .published_at(now),
        )
        .unwrap();
    repo.create_blog_post(&NewBlogPost::new("Brouillon", "brouillon", "<p>...</p>"))
        .unwrap();

    let (total, items) = repo.list_blog_posts(BlogPostListQuery::new()).unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, published.id);

    let (total_all, _) = repo
        .list_blog_posts(BlogPostListQuery::new().include_unpublished())
        .unwrap();
    assert_eq!(total_all, 2);

    let found = repo.get_blog_post_by_slug("guide-des-holothuries").unwrap();
    assert_eq!(found.map(|p| p.id), Some(published.id));
    assert!(repo.get_blog_post_by_slug("no-such-post").unwrap().is_none());
}

#[test]
fn test_admin_repository_lookup() {
    let test_db = common::TestDb::new("test_admin_repository_lookup.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_admin(&NewAdmin::new(
            "admin1",
            "admin1@cosmopharmal-industry.com",
            "$2b$12$not-a-real-hash",
        ))
        .unwrap();
    assert_eq!(created.role, "admin");

    let found = repo
        .get_admin_by_email("admin1@cosmopharmal-industry.com")
        .unwrap()
        .expect("expected the admin to be readable back");
    assert_eq!(found.id, created.id);
    assert_eq!(found.password, "$2b$12$not-a-real-hash");

    assert!(
        repo.get_admin_by_email("nobody@cosmopharmal-industry.com")
            .unwrap()
            .is_none()
    );
}
