//! Seed binary: wipes and repopulates the database with the demo catalog,
//! blog content and admin accounts. Run against a migrated database:
//!
//! ```text
//! DATABASE_URL=app.db cargo run --bin seed
//! ```

use std::env;

use chrono::Duration;
use dotenvy::dotenv;

use cosmopharma_site::db::establish_connection_pool;
use cosmopharma_site::domain::admin::NewAdmin;
use cosmopharma_site::domain::blog_post::NewBlogPost;
use cosmopharma_site::domain::category::NewCategory;
use cosmopharma_site::domain::product::NewProduct;
use cosmopharma_site::domain::submission::NewSubmission;
use cosmopharma_site::repository::{
    AdminWriter, BlogPostWriter, CategoryWriter, DieselRepository, ProductWriter,
    SubmissionWriter,
};

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok();

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    if let Err(e) = seed(&repo) {
        log::error!("Seeding failed: {e}");
        std::process::exit(1);
    }
}

fn seed(repo: &DieselRepository) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Clearing existing data");
    repo.clear_all()?;

    log::info!("Creating categories");
    let holothurie = repo.create_category(
        &NewCategory::new("Holothurie Séchée", "holothurie-sechee")
            .with_description("Concombres de mer séchés de qualité pharmaceutique")
            .with_seo(
                "Holothurie Séchée - Qualité Pharmaceutique",
                "Fournisseurs d'holothurie séchée pour l'industrie pharmaceutique.",
            ),
    )?;
    let beche_de_mer = repo.create_category(
        &NewCategory::new("Bêche-de-mer Premium", "beche-de-mer-premium")
            .with_description("Bêche-de-mer de grade premium pour applications médicales")
            .with_seo(
                "Bêche-de-mer Premium - Grade Médical",
                "Approvisionnement en bêche-de-mer premium pour laboratoires pharmaceutiques.",
            ),
    )?;
    let pacifique = repo.create_category(
        &NewCategory::new("Concombre Pacifique", "concombre-pacifique")
            .with_description("Concombres de mer du Pacifique, origine contrôlée")
            .with_seo(
                "Concombre de Mer Pacifique - Origine Contrôlée",
                "Concombres de mer du Pacifique, traçabilité garantie.",
            ),
    )?;

    log::info!("Creating products");
    let scabra = repo.create_product(
        &NewProduct::new(
            "Holothuria Scabra Grade A",
            "holothuria-scabra-grade-a",
            "<p>L'Holothuria Scabra de grade A représente le standard de qualité le plus \
             élevé pour l'industrie pharmaceutique. Riche en saponines triterpéniques, \
             cette espèce présente des propriétés anti-inflammatoires et \
             immunomodulatrices remarquables.</p>",
        )
        .with_short_desc(
            "Holothuria Scabra de grade pharmaceutique A, riche en saponines triterpéniques.",
        )
        .with_specs(
            "Espèce: Holothuria scabra\nGrade: A (Pharmaceutique)\nTaux d'humidité: < 12%\n\
             Saponines: > 15%\nOrigine: Océan Indien\nCertification: GMP, ISO 22000",
        )
        .with_seo(
            "Holothuria Scabra Grade A - Concombre de Mer Pharmaceutique",
            "Achat Holothuria Scabra grade A pour industrie pharmaceutique.",
            "holothuria scabra, concombre mer grade A, sandfish pharmaceutique",
        )
        .with_image("/images/products/holothuria-scabra-a.jpg")
        .with_quantity_bounds(50, 1000)
        .with_price_range("850-1200 EUR/kg")
        .with_quality("Grade A Pharmaceutique")
        .with_origin("Océan Indien")
        .featured(),
    )?;
    let edulis = repo.create_product(
        &NewProduct::new(
            "Holothuria Edulis Premium",
            "holothuria-edulis-premium",
            "<p>L'Holothuria Edulis Premium est hautement valorisée pour sa concentration \
             exceptionnelle en peptides bioactifs et en chondroïtine sulfate naturelle.</p>",
        )
        .with_short_desc(
            "Holothuria Edulis premium, source naturelle de chondroïtine sulfate.",
        )
        .with_specs(
            "Espèce: Holothuria edulis\nGrade: Premium\nChondroïtine sulfate: > 8%\n\
             Protéines: > 45%\nOrigine: Pacifique Sud",
        )
        .with_seo(
            "Holothuria Edulis Premium - Chondroïtine Naturelle",
            "Holothuria Edulis premium pour applications thérapeutiques.",
            "holothuria edulis, chondroïtine sulfate, glycosaminoglycanes",
        )
        .with_image("/images/products/holothuria-edulis.jpg")
        .with_quantity_bounds(25, 500)
        .with_price_range("1200-1600 EUR/kg")
        .with_quality("Premium")
        .with_origin("Pacifique Sud")
        .featured(),
    )?;
    let japonicus = repo.create_product(
        &NewProduct::new(
            "Stichopus Japonicus Bio",
            "stichopus-japonicus-bio",
            "<p>Le Stichopus Japonicus certifié biologique, récolté dans les eaux froides \
             du Japon, est réputé pour sa richesse en fucoïdane.</p>",
        )
        .with_short_desc("Stichopus Japonicus bio, riche en fucoïdane.")
        .with_specs(
            "Espèce: Stichopus japonicus\nGrade: Bio\nFucoïdane: > 10%\nOrigine: Japon",
        )
        .with_seo(
            "Stichopus Japonicus Bio - Fucoïdane Naturel",
            "Stichopus Japonicus certifié biologique pour la recherche pharmaceutique.",
            "stichopus japonicus, fucoïdane, concombre mer bio",
        )
        .with_image("/images/products/stichopus-japonicus.jpg")
        .with_quantity_bounds(10, 200)
        .with_price_range("2500-3000 EUR/kg")
        .with_quality("Bio Certifié")
        .with_origin("Japon"),
    )?;
    let ananas = repo.create_product(
        &NewProduct::new(
            "Thelenota Ananas Extract-Ready",
            "thelenota-ananas-extract-ready",
            "<p>Le Thelenota Ananas préparé pour extraction, avec un profil en \
             triterpènes glycosides adapté aux procédés industriels.</p>",
        )
        .with_short_desc("Thelenota Ananas préparé pour extraction industrielle.")
        .with_specs("Espèce: Thelenota ananas\nPréparation: Extract-ready\nOrigine: Indonésie")
        .with_seo(
            "Thelenota Ananas Extract-Ready",
            "Thelenota Ananas prêt pour extraction pharmaceutique.",
            "thelenota ananas, extraction, triterpènes glycosides",
        )
        .with_image("/images/products/thelenota-ananas.jpg")
        .with_quantity_bounds(100, 2000)
        .with_price_range("600-900 EUR/kg")
        .with_quality("Extract-Ready")
        .with_origin("Indonésie"),
    )?;
    let nobilis = repo.create_product(
        &NewProduct::new(
            "Holothuria Nobilis Pharma Grade",
            "holothuria-nobilis-pharma-grade",
            "<p>L'Holothuria Nobilis de grade pharmaceutique, l'une des espèces les plus \
             recherchées pour ses holothurines.</p>",
        )
        .with_short_desc("Holothuria Nobilis de grade pharmaceutique.")
        .with_specs("Espèce: Holothuria nobilis\nGrade: Pharma\nOrigine: Madagascar")
        .with_seo(
            "Holothuria Nobilis Pharma Grade",
            "Holothuria Nobilis de grade pharmaceutique, traçabilité complète.",
            "holothuria nobilis, holothurines, grade pharmaceutique",
        )
        .with_image("/images/products/holothuria-nobilis.jpg")
        .with_quantity_bounds(20, 400)
        .with_price_range("1800-2400 EUR/kg")
        .with_quality("Pharma Grade")
        .with_origin("Madagascar"),
    )?;

    log::info!("Linking products to categories");
    repo.assign_category(scabra.id, holothurie.id)?;
    repo.assign_category(scabra.id, beche_de_mer.id)?;
    repo.assign_category(edulis.id, beche_de_mer.id)?;
    repo.assign_category(japonicus.id, pacifique.id)?;
    repo.assign_category(ananas.id, holothurie.id)?;
    repo.assign_category(nobilis.id, beche_de_mer.id)?;

    log::info!("Creating sample submissions");
    repo.create_submission(
        &NewSubmission::new(
            "Pacific Marine Resources Ltd",
            "contact@pacificmarine.com",
            scabra.id,
            "500kg",
            "Australie - Grande Barrière",
            "Fournisseur certifié avec 15 ans d'expérience. Traçabilité complète et \
             analyses disponibles.",
        )
        .with_phone("+61 8 9123 4567")
        .with_company("Pacific Marine Resources")
        .with_website("https://pacificmarine.com")
        .with_price("950 EUR/kg")
        .with_quality("Grade A Premium")
        .with_certifications("MSC, ISO 22000, HACCP"),
    )?;
    repo.create_submission(
        &NewSubmission::new(
            "Indo Ocean Trading",
            "sales@indoocean.co.id",
            scabra.id,
            "1000kg",
            "Indonésie - Sulawesi",
            "Production en grande quantité, livraison mensuelle possible. Certificats de \
             qualité fournis.",
        )
        .with_phone("+62 361 123456")
        .with_company("Indo Ocean Trading Pte Ltd")
        .with_price("880 EUR/kg")
        .with_quality("Grade A Standard")
        .with_certifications("BRC, ISO 9001"),
    )?;
    repo.create_submission(
        &NewSubmission::new(
            "Madagascar Sea Products",
            "export@madaseaproducts.mg",
            edulis.id,
            "200kg",
            "Madagascar - Côte Ouest",
            "Spécialiste Holothuria Edulis, récolte artisanale durable. Partenariat à \
             long terme possible.",
        )
        .with_phone("+261 20 12 345 67")
        .with_company("Madagascar Sea Products SARL")
        .with_price("1450 EUR/kg")
        .with_quality("Premium Plus")
        .with_certifications("Fair Trade, Organic"),
    )?;
    repo.create_submission(
        &NewSubmission::new(
            "Japan Marine Bio Co",
            "intl@japanmarinebio.jp",
            japonicus.id,
            "50kg",
            "Japon - Mer d'Okhotsk",
            "Certification bio JAS, contrôle qualité strict, emballage sous vide \
             individuel.",
        )
        .with_phone("+81 3 1234 5678")
        .with_company("Japan Marine Bio Co Ltd")
        .with_price("2800 EUR/kg")
        .with_quality("Bio Certifié Premium")
        .with_certifications("JAS Organic, ISO 14001"),
    )?;

    log::info!("Creating blog posts");
    let now = chrono::Local::now().naive_utc();
    repo.create_blog_post(
        &NewBlogPost::new(
            "Guide Complet des Concombres de Mer dans l'Industrie Pharmaceutique",
            "guide-concombres-mer-industrie-pharmaceutique",
            "<h1>Guide Complet des Concombres de Mer dans l'Industrie Pharmaceutique</h1>\
             <p>Les concombres de mer, également connus sous le nom d'holothuries, \
             représentent une ressource marine extraordinaire pour l'industrie \
             pharmaceutique moderne.</p>",
        )
        .with_excerpt(
            "Tour d'horizon des espèces d'holothuries et de leurs applications \
             pharmaceutiques.",
        )
        .with_seo(
            "Guide des Concombres de Mer Pharmaceutiques",
            "Guide complet des holothuries pour l'industrie pharmaceutique.",
            "concombre de mer, holothurie, industrie pharmaceutique",
        )
        .with_featured_image("/images/blog/guide-concombres.jpg")
        .with_author("Dr. Marine Dubois")
        .published_at(now - Duration::days(30)),
    )?;
    repo.create_blog_post(
        &NewBlogPost::new(
            "Choisir son Fournisseur de Concombres de Mer : Critères Essentiels",
            "choisir-fournisseur-concombres-mer-criteres-essentiels",
            "<h1>Choisir son Fournisseur de Concombres de Mer</h1><p>La qualité de \
             l'approvisionnement conditionne la qualité du produit fini : certifications, \
             traçabilité et analyses sont les trois piliers d'un partenariat fiable.</p>",
        )
        .with_excerpt("Certifications, traçabilité, analyses : les critères qui comptent.")
        .with_seo(
            "Choisir un Fournisseur de Concombres de Mer",
            "Les critères essentiels pour sélectionner un fournisseur d'holothuries.",
            "fournisseur concombre de mer, critères, certification",
        )
        .with_featured_image("/images/blog/choisir-fournisseur.jpg")
        .with_author("Service Achats")
        .published_at(now - Duration::days(14)),
    )?;
    repo.create_blog_post(
        &NewBlogPost::new(
            "Réglementation Européenne des Concombres de Mer Pharmaceutiques en 2024",
            "reglementation-europeenne-concombres-mer-pharmaceutiques-2024",
            "<h1>Réglementation Européenne 2024</h1><p>Le cadre réglementaire européen \
             applicable aux holothuries à usage pharmaceutique a évolué en 2024 ; tour \
             d'horizon des nouvelles exigences.</p>",
        )
        .with_excerpt("Ce qui change en 2024 pour l'importation d'holothuries dans l'UE.")
        .with_seo(
            "Réglementation Européenne Concombres de Mer 2024",
            "Les nouvelles exigences européennes pour les holothuries pharmaceutiques.",
            "réglementation, union européenne, holothuries",
        )
        .with_featured_image("/images/blog/reglementation-2024.jpg")
        .with_author("Expert Réglementaire")
        .published_at(now - Duration::days(7)),
    )?;

    log::info!("Creating admin accounts");
    for (name, email, password) in [
        ("admin1", "admin1@cosmopharmal-industry.com", "admin1"),
        ("admin2", "admin2@cosmopharmal-industry.com", "admin2"),
    ] {
        let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;
        repo.create_admin(&NewAdmin::new(name, email, hash))?;
    }

    log::info!("Seeding finished");
    Ok(())
}
