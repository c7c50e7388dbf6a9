use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse, Result};
use tracing::Instrument;
use uuid::Uuid;

use crate::models::{ErrorResponse, RankRequest, RankResponse};
use crate::AppState;

/// Rank lookup endpoint. Mounted for every method so that anything other
/// than POST gets a JSON 405 instead of falling through to the 404 handler.
///
/// A body that cannot be read (over the payload limit, broken stream) is
/// treated like a missing one.
pub async fn check_rank(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    body: Option<web::Bytes>,
) -> Result<HttpResponse> {
    if http_req.method() != Method::POST {
        return Ok(HttpResponse::MethodNotAllowed()
            .insert_header((actix_web::http::header::ALLOW, "POST"))
            .json(ErrorResponse::new("Method not allowed")));
    }

    let req = parse_request(body.as_deref().unwrap_or_default());
    let span = tracing::info_span!("check_rank", request_id = %Uuid::new_v4());

    match state.rank_service.lookup(&req).instrument(span).await {
        Ok(lookup) => Ok(HttpResponse::Ok().json(RankResponse::from(lookup))),
        Err(e) => {
            tracing::error!("Search error: {:?}", e);
            Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::with_details(
                    "Arama sırasında bir hata oluştu",
                    e.to_string(),
                )),
            )
        }
    }
}

/// Missing or malformed bodies read as an empty request.
fn parse_request(body: &[u8]) -> RankRequest {
    if body.is_empty() {
        return RankRequest::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::warn!("Ignoring malformed request body: {}", e);
        RankRequest::default()
    })
}
