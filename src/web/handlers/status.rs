// Dataset status handler — drives the slider ranges on the dashboard page.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::pipeline::join::EXAMPLE_CAP;
use crate::web::AppState;

/// GET /api/status — row counts plus the data-derived threshold bounds.
pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    let store = &state.store;
    let b = store.bounds();

    Json(serde_json::json!({
        "clusters": store.clusters().len(),
        "feedback": store.feedback().len(),
        "uncategorized_feedback": store.uncategorized_count(),
        "example_cap": EXAMPLE_CAP,
        "bounds": {
            "score": { "min": b.score.0, "max": b.score.1 },
            "nps": { "min": b.nps.0, "max": b.nps.1 },
            "frequency": { "min": b.frequency.0, "max": b.frequency.1 },
        },
    }))
}
