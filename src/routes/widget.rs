use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use tera::Tera;

use crate::db::DbPool;
use crate::dto::api::WidgetResponse;
use crate::models::config::ServerConfig;
use crate::routes::repository;
use crate::services::reviews::{EMBED_REVIEWS_LIMIT, get_reviews, get_stats};
use crate::services::widget::{build_embed_script, get_widget_config};
use crate::sources::HttpFetcher;

#[get("/api/widget")]
pub async fn api_widget(
    req: HttpRequest,
    pool: web::Data<Option<DbPool>>,
    config: web::Data<ServerConfig>,
) -> impl Responder {
    let repo = repository(&pool);
    let host = req.connection_info().host().to_string();

    let widget = get_widget_config(&host, config.public_base_url.as_deref(), repo.as_ref());
    let stats = get_stats(repo.as_ref());

    HttpResponse::Ok().json(WidgetResponse { widget, stats })
}

#[get("/api/widget-embed.js")]
pub async fn api_widget_embed(
    pool: web::Data<Option<DbPool>>,
    fetcher: web::Data<HttpFetcher>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let repo = repository(&pool);

    let reviews = get_reviews(EMBED_REVIEWS_LIMIT, fetcher.get_ref(), repo.as_ref()).await;
    let stats = get_stats(repo.as_ref());

    match build_embed_script(tera.get_ref(), "Verified Reviews", &reviews, stats.trust_score) {
        Ok(script) => HttpResponse::Ok()
            .content_type("application/javascript")
            .body(script),
        Err(e) => {
            log::error!("Widget embed error: {e}");
            HttpResponse::InternalServerError()
                .content_type("application/javascript")
                .body("// InstantProof widget failed to load")
        }
    }
}
