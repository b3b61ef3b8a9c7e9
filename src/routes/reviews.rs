use actix_web::{HttpResponse, Responder, get, web};

use crate::db::DbPool;
use crate::dto::api::ReviewsResponse;
use crate::routes::repository;
use crate::services::reviews::{REVIEWS_LIMIT, get_reviews, get_stats};
use crate::sources::HttpFetcher;

#[get("/api/reviews")]
pub async fn api_reviews(
    pool: web::Data<Option<DbPool>>,
    fetcher: web::Data<HttpFetcher>,
) -> impl Responder {
    let repo = repository(&pool);

    let reviews = get_reviews(REVIEWS_LIMIT, fetcher.get_ref(), repo.as_ref()).await;
    let stats = get_stats(repo.as_ref());

    HttpResponse::Ok().json(ReviewsResponse { reviews, stats })
}
