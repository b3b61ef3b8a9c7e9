use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;

use crate::db::DbPool;
use crate::domain::types::SearchQuery;
use crate::dto::api::ErrorResponse;
use crate::routes::repository;
use crate::services::search::{SEARCH_LIMIT, search_mentions};
use crate::sources::HttpFetcher;

#[derive(Deserialize, Debug)]
pub struct SearchParams {
    q: Option<String>,
    query: Option<String>,
}

#[get("/api/search")]
pub async fn api_search(
    params: web::Query<SearchParams>,
    pool: web::Data<Option<DbPool>>,
    fetcher: web::Data<HttpFetcher>,
) -> impl Responder {
    let raw = params
        .q
        .as_deref()
        .or(params.query.as_deref())
        .unwrap_or_default();
    let query = match SearchQuery::new(raw) {
        Ok(query) => query,
        Err(_) => return HttpResponse::BadRequest().json(ErrorResponse::new("Missing query")),
    };

    let repo = repository(&pool);
    let results = search_mentions(query.as_str(), SEARCH_LIMIT, fetcher.get_ref(), repo.as_ref())
        .await;

    HttpResponse::Ok().json(results)
}
