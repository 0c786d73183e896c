use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::WearerId;
use super::repository::WardrobeRepository;
use super::service::{OutfitRequest, RecommendationError, RecommendationService};

/// Router builder exposing the recommendation endpoint.
pub fn outfit_router<R>(service: Arc<RecommendationService<R>>) -> Router
where
    R: WardrobeRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/wearers/:wearer_id/outfits",
            post(recommend_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn recommend_handler<R>(
    State(service): State<Arc<RecommendationService<R>>>,
    Path(wearer_id): Path<String>,
    payload: Result<axum::Json<OutfitRequest>, JsonRejection>,
) -> Response
where
    R: WardrobeRepository + 'static,
{
    let axum::Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            let payload = json!({
                "error": rejection.body_text(),
            });
            return (rejection.status(), axum::Json(payload)).into_response();
        }
    };

    let wearer_id = WearerId(wearer_id);
    match service.recommend(&wearer_id, &request) {
        Ok(recommendation) => (StatusCode::OK, axum::Json(recommendation)).into_response(),
        Err(error) if error.is_contract_violation() => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(RecommendationError::Repository(error)) => {
            warn!(wearer_id = %wearer_id.0, %error, "wardrobe repository failed");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
