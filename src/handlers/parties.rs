use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use validator::Validate;

use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
};
use crate::domain::ContractorKind;
use crate::errors::ApiError;
use crate::services::parties::{ContractorInput, UnitInput};
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct UnitRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub address: String,
    #[validate(length(min = 1, max = 20))]
    pub postal_code: String,
    #[validate(length(min = 1, max = 50))]
    pub city: String,
}

impl From<UnitRequest> for UnitInput {
    fn from(request: UnitRequest) -> Self {
        UnitInput {
            name: request.name,
            address: request.address,
            postal_code: request.postal_code,
            city: request.city,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ContractorRequest {
    pub kind: ContractorKind,
    #[validate(length(max = 50))]
    pub company_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub address: String,
    #[validate(length(min = 1, max = 20))]
    pub postal_code: String,
    #[validate(length(min = 1, max = 50))]
    pub city: String,
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
}

impl From<ContractorRequest> for ContractorInput {
    fn from(request: ContractorRequest) -> Self {
        ContractorInput {
            kind: request.kind,
            company_name: request.company_name,
            address: request.address,
            postal_code: request.postal_code,
            city: request.city,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ContractorFilter {
    pub kind: Option<ContractorKind>,
}

async fn create_store(
    State(state): State<AppState>,
    Json(payload): Json<UnitRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let store = state
        .services
        .parties
        .create_store(payload.into())
        .await
        .map_err(map_service_error)?;
    Ok(created_response(store))
}

async fn list_stores(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let stores = state
        .services
        .parties
        .list_stores()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(stores))
}

async fn get_store(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state
        .services
        .parties
        .get_store(id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(store))
}

async fn update_store(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UnitRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let store = state
        .services
        .parties
        .update_store(id, payload.into())
        .await
        .map_err(map_service_error)?;
    Ok(success_response(store))
}

async fn delete_store(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .parties
        .delete_store(id)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

async fn create_shop(
    State(state): State<AppState>,
    Json(payload): Json<UnitRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let shop = state
        .services
        .parties
        .create_shop(payload.into())
        .await
        .map_err(map_service_error)?;
    Ok(created_response(shop))
}

async fn list_shops(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let shops = state
        .services
        .parties
        .list_shops()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(shops))
}

async fn get_shop(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let shop = state
        .services
        .parties
        .get_shop(id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(shop))
}

async fn update_shop(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UnitRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let shop = state
        .services
        .parties
        .update_shop(id, payload.into())
        .await
        .map_err(map_service_error)?;
    Ok(success_response(shop))
}

async fn delete_shop(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .parties
        .delete_shop(id)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

async fn create_contractor(
    State(state): State<AppState>,
    Json(payload): Json<ContractorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let contractor = state
        .services
        .parties
        .create_contractor(payload.into())
        .await
        .map_err(map_service_error)?;
    Ok(created_response(contractor))
}

async fn list_contractors(
    State(state): State<AppState>,
    Query(filter): Query<ContractorFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let contractors = state
        .services
        .parties
        .list_contractors(filter.kind)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(contractors))
}

async fn get_contractor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let contractor = state
        .services
        .parties
        .get_contractor(id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(contractor))
}

async fn update_contractor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ContractorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let contractor = state
        .services
        .parties
        .update_contractor(id, payload.into())
        .await
        .map_err(map_service_error)?;
    Ok(success_response(contractor))
}

async fn delete_contractor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .parties
        .delete_contractor(id)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

pub fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_store))
        .route("/", get(list_stores))
        .route("/:id", get(get_store))
        .route("/:id", put(update_store))
        .route("/:id", delete(delete_store))
}

pub fn shop_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_shop))
        .route("/", get(list_shops))
        .route("/:id", get(get_shop))
        .route("/:id", put(update_shop))
        .route("/:id", delete(delete_shop))
}

pub fn contractor_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_contractor))
        .route("/", get(list_contractors))
        .route("/:id", get(get_contractor))
        .route("/:id", put(update_contractor))
        .route("/:id", delete(delete_contractor))
}
