use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use validator::Validate;

use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
};
use crate::errors::ApiError;
use crate::services::workers::WorkerInput;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct WorkerRequest {
    #[validate(length(min = 1, max = 20))]
    pub first_name: String,
    #[validate(length(min = 1, max = 20))]
    pub last_name: String,
    #[validate(length(min = 1, max = 20))]
    pub position: String,
    #[validate(email)]
    pub email: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl From<WorkerRequest> for WorkerInput {
    fn from(request: WorkerRequest) -> Self {
        WorkerInput {
            first_name: request.first_name,
            last_name: request.last_name,
            position: request.position,
            email: request.email,
            active: request.active,
        }
    }
}

async fn create_worker(
    State(state): State<AppState>,
    Json(payload): Json<WorkerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let worker = state
        .services
        .workers
        .create_worker(payload.into())
        .await
        .map_err(map_service_error)?;
    Ok(created_response(worker))
}

async fn list_workers(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let workers = state
        .services
        .workers
        .list_workers()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(workers))
}

async fn get_worker(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let worker = state
        .services
        .workers
        .get_worker(id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(worker))
}

async fn update_worker(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<WorkerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let worker = state
        .services
        .workers
        .update_worker(id, payload.into())
        .await
        .map_err(map_service_error)?;
    Ok(success_response(worker))
}

async fn delete_worker(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .workers
        .delete_worker(id)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

pub fn worker_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_worker))
        .route("/", get(list_workers))
        .route("/:id", get(get_worker))
        .route("/:id", put(update_worker))
        .route("/:id", delete(delete_worker))
}
