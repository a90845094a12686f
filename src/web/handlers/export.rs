// CSV download handler.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::output::csv::{self, EXPORT_FILENAME};
use crate::pipeline;
use crate::web::handlers::ThresholdQuery;
use crate::web::{api_error, AppState};

/// GET /api/export — the filtered, ranked cluster table as a CSV download.
///
/// Examples are display-only and never exported; the byte stream holds the
/// same columns as the input cluster table, in stable order.
pub async fn download_csv(
    State(state): State<AppState>,
    Query(params): Query<ThresholdQuery>,
) -> Response {
    let thresholds = params.resolve(state.store.bounds());
    let view = pipeline::build_view(&state.store, &thresholds);

    match csv::to_bytes(&view.clusters()) {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{EXPORT_FILENAME}\""),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "CSV export failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Export failed")
        }
    }
}
