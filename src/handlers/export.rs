use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};

use super::common::map_service_error;
use crate::errors::ApiError;
use crate::AppState;

fn csv_attachment(body: String) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"export.csv\"",
            ),
        ],
        body,
    )
}

async fn export_all(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let csv = state
        .services
        .export
        .build_csv(None)
        .await
        .map_err(map_service_error)?;
    Ok(csv_attachment(csv))
}

async fn export_note(
    State(state): State<AppState>,
    Path(note_number): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let csv = state
        .services
        .export
        .build_csv(Some(&note_number))
        .await
        .map_err(map_service_error)?;
    Ok(csv_attachment(csv))
}

pub fn export_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(export_all))
        .route("/:note_number", get(export_note))
}
