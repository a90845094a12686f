// Filtered feature list handler.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::pipeline;
use crate::web::handlers::ThresholdQuery;
use crate::web::AppState;

/// GET /api/features — the filtered, ranked view with example quotes.
///
/// `empty` is an explicit flag so the page can show its "no matches"
/// notice without inspecting the array.
pub async fn list_features(
    State(state): State<AppState>,
    Query(params): Query<ThresholdQuery>,
) -> impl IntoResponse {
    let thresholds = params.resolve(state.store.bounds());
    let view = pipeline::build_view(&state.store, &thresholds);

    Json(serde_json::json!({
        "features": view.features,
        "total": view.features.len(),
        "empty": view.is_empty(),
        "thresholds": thresholds,
    }))
}
