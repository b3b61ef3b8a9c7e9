use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse, Responder, post, web};

use crate::dto::api::ErrorResponse;
use crate::forms::auth::SignInForm;
use crate::services::ServiceError;
use crate::services::auth::sign_in;

/// Replace the extractor's plain-text 400 with the JSON error envelope.
///
/// Without this a malformed body or a missing `email` field never reaches
/// the handler and the client gets a text/plain response.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let response =
        HttpResponse::BadRequest().json(ErrorResponse::new("A valid email is required"));
    InternalError::from_response(err, response).into()
}

#[post("/api/auth")]
pub async fn api_auth(form: web::Json<SignInForm>) -> impl Responder {
    match sign_in(&form) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::Validation(message)) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(&message))
        }
        Err(e) => {
            log::error!("Auth handler error: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Unable to sign in right now"))
        }
    }
}
