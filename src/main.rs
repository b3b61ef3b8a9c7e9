use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tera::Tera;

use instantproof::db::{DbPool, establish_connection_pool};
use instantproof::models::config::ServerConfig;
use instantproof::repository::DieselRepository;
use instantproof::routes::{auth, reviews, search, widget};
use instantproof::services::seed::seed_demo_data;
use instantproof::sources::HttpFetcher;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Connect, migrate and seed. Returns `None` (and keeps the server running
/// without persistence) when anything in the chain fails.
fn prepare_database(database_url: &str) -> Option<DbPool> {
    let pool = match establish_connection_pool(database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to connect to {database_url}, running without persistence: {e}");
            return None;
        }
    };

    match pool.get() {
        Ok(mut conn) => {
            if let Err(e) = conn.run_pending_migrations(MIGRATIONS) {
                log::error!("Failed to run migrations, running without persistence: {e}");
                return None;
            }
        }
        Err(e) => {
            log::error!("Failed to check out a connection, running without persistence: {e}");
            return None;
        }
    }

    if let Err(e) = seed_demo_data(&DieselRepository::new(pool.clone())) {
        log::error!("Failed to seed demo data: {e}");
    }

    Some(pool)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = ServerConfig::from_env().map_err(std::io::Error::other)?;

    let pool: Option<DbPool> = match &config.database_url {
        Some(url) => prepare_database(url),
        None => {
            log::info!("No DATABASE_URL configured, serving fallback data only");
            None
        }
    };

    let fetcher =
        HttpFetcher::new(config.gnews_api_key.clone()).map_err(std::io::Error::other)?;
    let tera = Tera::new("templates/**/*.html").map_err(std::io::Error::other)?;

    let bind_address = config.bind_address.clone();
    log::info!("Starting InstantProof API server on {bind_address}");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::JsonConfig::default().error_handler(auth::json_error_handler))
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(fetcher.clone()))
            .app_data(web::Data::new(tera.clone()))
            .service(search::api_search)
            .service(reviews::api_reviews)
            .service(widget::api_widget)
            .service(widget::api_widget_embed)
            .service(auth::api_auth)
    })
    .bind(bind_address)?
    .run()
    .await
}
