use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, post},
    Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
};
use crate::domain::{Handover, NoteKind};
use crate::errors::ApiError;
use crate::services::notes::{NoteInput, PositionInput};
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct NoteRequest {
    pub kind: NoteKind,
    pub handover: Handover,
    #[validate(length(min = 1, max = 20))]
    pub number: String,
    pub from_store_id: Option<i64>,
    pub from_shop_id: Option<i64>,
    pub from_contractor_id: Option<i64>,
    pub to_store_id: Option<i64>,
    pub to_shop_id: Option<i64>,
    pub to_contractor_id: Option<i64>,
    pub worker_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct PositionRequest {
    pub product_id: i64,
    pub quantity: Decimal,
    pub price_net: Option<Decimal>,
    #[validate(range(min = 0, max = 100))]
    pub tax_rate: Option<i32>,
    #[serde(default)]
    pub discount_value: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct NoteFilter {
    pub kind: Option<NoteKind>,
    pub handover: Option<Handover>,
}

async fn create_note(
    State(state): State<AppState>,
    Json(payload): Json<NoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let note = state
        .services
        .notes
        .create_note(NoteInput {
            kind: payload.kind,
            handover: payload.handover,
            number: payload.number,
            from_store_id: payload.from_store_id,
            from_shop_id: payload.from_shop_id,
            from_contractor_id: payload.from_contractor_id,
            to_store_id: payload.to_store_id,
            to_shop_id: payload.to_shop_id,
            to_contractor_id: payload.to_contractor_id,
            worker_id: payload.worker_id,
        })
        .await
        .map_err(map_service_error)?;
    Ok(created_response(note))
}

async fn list_notes(
    State(state): State<AppState>,
    Query(filter): Query<NoteFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let notes = state
        .services
        .notes
        .list_notes(filter.kind, filter.handover)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(notes))
}

async fn get_note(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let detail = state
        .services
        .notes
        .get_note(&number)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(detail))
}

async fn delete_note(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .notes
        .delete_note(&number)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

async fn add_position(
    State(state): State<AppState>,
    Path(number): Path<String>,
    Json(payload): Json<PositionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let position = state
        .services
        .notes
        .add_position(
            &number,
            PositionInput {
                product_id: payload.product_id,
                quantity: payload.quantity,
                price_net: payload.price_net,
                tax_rate: payload.tax_rate,
                discount_value: payload.discount_value,
            },
        )
        .await
        .map_err(map_service_error)?;
    Ok(created_response(position))
}

pub fn note_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_note))
        .route("/", get(list_notes))
        .route("/:number", get(get_note))
        .route("/:number", delete(delete_note))
        .route("/:number/positions", post(add_position))
}
