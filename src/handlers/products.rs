use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    PaginatedResponse, PaginationParams,
};
use crate::errors::ApiError;
use crate::domain::ProductGroup;
use crate::services::products::ProductInput;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct NameRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProductRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub group: ProductGroup,
    #[validate(length(min = 1, max = 50))]
    pub code: String,
    #[validate(length(min = 1, max = 20))]
    pub batch_number: String,
    #[validate(length(min = 1, max = 10))]
    pub unit: String,
    pub purchase_price: Decimal,
    pub sales_price_net: Decimal,
    #[validate(range(min = 0, max = 100))]
    pub tax_rate: i32,
    pub best_before_date: NaiveDate,
    #[serde(default)]
    pub description: String,
    pub manufacturer_id: i64,
    pub category_id: i64,
}

impl From<ProductRequest> for ProductInput {
    fn from(request: ProductRequest) -> Self {
        ProductInput {
            name: request.name,
            group: request.group,
            code: request.code,
            batch_number: request.batch_number,
            unit: request.unit,
            purchase_price: request.purchase_price,
            sales_price_net: request.sales_price_net,
            tax_rate: request.tax_rate,
            best_before_date: request.best_before_date,
            description: request.description,
            manufacturer_id: request.manufacturer_id,
            category_id: request.category_id,
        }
    }
}

async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let product = state
        .services
        .products
        .create_product(payload.into())
        .await
        .map_err(map_service_error)?;
    Ok(created_response(product))
}

async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, ApiError> {
    let (page, per_page) = params.resolve(&state.config);
    let (products, total) = state
        .services
        .products
        .list_products(page, per_page)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(PaginatedResponse::new(
        products, page, per_page, total,
    )))
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state
        .services
        .products
        .get_product(id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(product))
}

async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let product = state
        .services
        .products
        .update_product(id, payload.into())
        .await
        .map_err(map_service_error)?;
    Ok(success_response(product))
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .products
        .delete_product(id)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

async fn create_manufacturer(
    State(state): State<AppState>,
    Json(payload): Json<NameRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let manufacturer = state
        .services
        .products
        .create_manufacturer(payload.name)
        .await
        .map_err(map_service_error)?;
    Ok(created_response(manufacturer))
}

async fn list_manufacturers(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let manufacturers = state
        .services
        .products
        .list_manufacturers()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(manufacturers))
}

async fn update_manufacturer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<NameRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let manufacturer = state
        .services
        .products
        .update_manufacturer(id, payload.name)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(manufacturer))
}

async fn delete_manufacturer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .products
        .delete_manufacturer(id)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<NameRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let category = state
        .services
        .products
        .create_category(payload.name)
        .await
        .map_err(map_service_error)?;
    Ok(created_response(category))
}

async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let categories = state
        .services
        .products
        .list_categories()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(categories))
}

async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<NameRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let category = state
        .services
        .products
        .update_category(id, payload.name)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(category))
}

async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .products
        .delete_category(id)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_product))
        .route("/", get(list_products))
        .route("/:id", get(get_product))
        .route("/:id", put(update_product))
        .route("/:id", delete(delete_product))
}

pub fn manufacturer_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_manufacturer))
        .route("/", get(list_manufacturers))
        .route("/:id", put(update_manufacturer))
        .route("/:id", delete(delete_manufacturer))
}

pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_category))
        .route("/", get(list_categories))
        .route("/:id", put(update_category))
        .route("/:id", delete(delete_category))
}
