use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
};
use crate::errors::ApiError;
use crate::services::stock::StockPositionInput;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct StockPositionRequest {
    pub product_id: i64,
    pub quantity: Decimal,
    pub minimal_quantity: Option<Decimal>,
    pub average_supply_time: Option<Decimal>,
}

impl From<StockPositionRequest> for StockPositionInput {
    fn from(request: StockPositionRequest) -> Self {
        StockPositionInput {
            product_id: request.product_id,
            quantity: request.quantity,
            minimal_quantity: request.minimal_quantity,
            average_supply_time: request.average_supply_time,
        }
    }
}

async fn list_stocks(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let stocks = state
        .services
        .stock
        .list_stocks()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(stocks))
}

async fn get_stock(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let stock = state
        .services
        .stock
        .get_stock(id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(stock))
}

async fn list_positions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let positions = state
        .services
        .stock
        .list_positions(id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(positions))
}

async fn add_position(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<StockPositionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let position = state
        .services
        .stock
        .add_position(id, payload.into())
        .await
        .map_err(map_service_error)?;
    Ok(created_response(position))
}

async fn update_position(
    State(state): State<AppState>,
    Path(position_id): Path<i64>,
    Json(payload): Json<StockPositionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let position = state
        .services
        .stock
        .update_position(position_id, payload.into())
        .await
        .map_err(map_service_error)?;
    Ok(success_response(position))
}

async fn delete_position(
    State(state): State<AppState>,
    Path(position_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .stock
        .delete_position(position_id)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

pub fn stock_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stocks))
        .route("/:id", get(get_stock))
        .route("/:id/positions", get(list_positions))
        .route("/:id/positions", post(add_position))
        .route("/positions/:position_id", put(update_position))
        .route("/positions/:position_id", delete(delete_position))
}
