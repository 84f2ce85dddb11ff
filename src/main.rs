use std::env;

use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use dotenvy::dotenv;
use tera::Tera;

use cosmopharma_site::config::ServerConfig;
use cosmopharma_site::db::establish_connection_pool;
use cosmopharma_site::repository::DieselRepository;
use cosmopharma_site::routes::api::{
    api_create_submission, api_list_submissions, api_login, json_error_handler,
    query_error_handler,
};
use cosmopharma_site::routes::auth::{login, logout, show_dashboard, show_login};
use cosmopharma_site::routes::blog::{show_blog, show_blog_post};
use cosmopharma_site::routes::main::show_index;
use cosmopharma_site::routes::products::{show_product, show_products};
use cosmopharma_site::routes::seo::{robots_txt, sitemap_xml};
use cosmopharma_site::routes::submissions::show_submission_form;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let secret_key = match env::var("SECRET_KEY") {
        Ok(key) => Key::from(key.as_bytes()),
        Err(_) => Key::generate(),
    };

    let domain = env::var("DOMAIN").unwrap_or("localhost".to_string());
    let base_url =
        env::var("SITE_URL").unwrap_or("https://www.cosmopharmalindustry.org".to_string());
    let server_config = ServerConfig { base_url };

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{domain}")))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_index)
            .service(show_products)
            .service(show_product)
            .service(show_blog)
            .service(show_blog_post)
            .service(show_submission_form)
            .service(show_login)
            .service(login)
            .service(logout)
            .service(show_dashboard)
            .service(api_login)
            .service(api_create_submission)
            .service(api_list_submissions)
            .service(sitemap_xml)
            .service(robots_txt)
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
