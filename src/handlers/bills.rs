use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
};
use crate::domain::DocumentState;
use crate::errors::ApiError;
use crate::services::billing::{
    AdvanceInvoiceInput, AdvanceInvoiceUpdate, InvoiceInput, InvoiceUpdate,
};
use crate::AppState;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct InvoiceRequest {
    pub worker_id: i64,
    #[validate(range(min = 0, max = 365))]
    pub supply_days: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct InvoiceUpdateRequest {
    pub worker_id: i64,
    #[validate(range(min = 0, max = 365))]
    pub supply_days: i64,
    pub state: DocumentState,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AdvanceInvoiceRequest {
    pub worker_id: i64,
    #[validate(range(min = 0, max = 365))]
    pub supply_days: i64,
    pub advance_value: Decimal,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AdvanceInvoiceUpdateRequest {
    pub worker_id: i64,
    #[validate(range(min = 0, max = 365))]
    pub supply_days: i64,
    pub state: DocumentState,
    pub advance_value: Decimal,
}

/// Issue a receipt for an external dispatch note.
#[utoipa::path(
    post,
    path = "/api/v1/receipts/{note_number}",
    params(("note_number" = String, Path, description = "Number of the dispatched note")),
    responses(
        (status = 201, description = "Receipt created"),
        (status = 404, description = "Note not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Receipt or advance invoice already exists", body = crate::errors::ErrorResponse)
    ),
    tag = "receipts"
)]
pub async fn create_receipt(
    State(state): State<AppState>,
    Path(note_number): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let receipt = state
        .services
        .billing
        .create_receipt(&note_number)
        .await
        .map_err(map_service_error)?;
    Ok(created_response(receipt))
}

#[utoipa::path(
    get,
    path = "/api/v1/receipts",
    responses((status = 200, description = "All receipts with their notes")),
    tag = "receipts"
)]
pub async fn list_receipts(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let receipts = state
        .services
        .billing
        .list_receipts()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(receipts))
}

#[utoipa::path(
    get,
    path = "/api/v1/receipts/{note_number}",
    params(("note_number" = String, Path, description = "Note number")),
    responses(
        (status = 200, description = "Receipt with the embedded note"),
        (status = 404, description = "Receipt not found", body = crate::errors::ErrorResponse)
    ),
    tag = "receipts"
)]
pub async fn get_receipt(
    State(state): State<AppState>,
    Path(note_number): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let detail = state
        .services
        .billing
        .get_receipt(&note_number)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(detail))
}

#[utoipa::path(
    delete,
    path = "/api/v1/receipts/{note_number}",
    params(("note_number" = String, Path, description = "Note number")),
    responses(
        (status = 204, description = "Receipt deleted"),
        (status = 404, description = "Receipt not found", body = crate::errors::ErrorResponse)
    ),
    tag = "receipts"
)]
pub async fn delete_receipt(
    State(state): State<AppState>,
    Path(note_number): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .billing
        .delete_receipt(&note_number)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

/// Issue an invoice for an external dispatch note. Carries the advance
/// invoice's rest values when one exists.
#[utoipa::path(
    post,
    path = "/api/v1/invoices/{note_number}",
    params(("note_number" = String, Path, description = "Number of the dispatched note")),
    request_body = InvoiceRequest,
    responses(
        (status = 201, description = "Invoice created"),
        (status = 404, description = "Note or worker not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Invoice already exists", body = crate::errors::ErrorResponse)
    ),
    tag = "invoices"
)]
pub async fn create_invoice(
    State(state): State<AppState>,
    Path(note_number): Path<String>,
    Json(payload): Json<InvoiceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let invoice = state
        .services
        .billing
        .create_invoice(
            &note_number,
            InvoiceInput {
                worker_id: payload.worker_id,
                supply_days: payload.supply_days,
            },
        )
        .await
        .map_err(map_service_error)?;
    Ok(created_response(invoice))
}

#[utoipa::path(
    put,
    path = "/api/v1/invoices/{note_number}",
    params(("note_number" = String, Path, description = "Note number")),
    request_body = InvoiceUpdateRequest,
    responses(
        (status = 200, description = "Invoice updated"),
        (status = 404, description = "Invoice not found", body = crate::errors::ErrorResponse)
    ),
    tag = "invoices"
)]
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(note_number): Path<String>,
    Json(payload): Json<InvoiceUpdateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let invoice = state
        .services
        .billing
        .update_invoice(
            &note_number,
            InvoiceUpdate {
                worker_id: payload.worker_id,
                supply_days: payload.supply_days,
                state: payload.state,
            },
        )
        .await
        .map_err(map_service_error)?;
    Ok(success_response(invoice))
}

#[utoipa::path(
    get,
    path = "/api/v1/invoices",
    responses((status = 200, description = "All invoices with their notes")),
    tag = "invoices"
)]
pub async fn list_invoices(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let invoices = state
        .services
        .billing
        .list_invoices()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(invoices))
}

#[utoipa::path(
    get,
    path = "/api/v1/invoices/{note_number}",
    params(("note_number" = String, Path, description = "Note number")),
    responses(
        (status = 200, description = "Invoice with the embedded note"),
        (status = 404, description = "Invoice not found", body = crate::errors::ErrorResponse)
    ),
    tag = "invoices"
)]
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(note_number): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let detail = state
        .services
        .billing
        .get_invoice(&note_number)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(detail))
}

#[utoipa::path(
    delete,
    path = "/api/v1/invoices/{note_number}",
    params(("note_number" = String, Path, description = "Note number")),
    responses(
        (status = 204, description = "Invoice deleted"),
        (status = 404, description = "Invoice not found", body = crate::errors::ErrorResponse)
    ),
    tag = "invoices"
)]
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(note_number): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .billing
        .delete_invoice(&note_number)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

/// Issue an advance invoice for an external dispatch note. The paid
/// amount is split proportionally to the note totals.
#[utoipa::path(
    post,
    path = "/api/v1/advance-invoices/{note_number}",
    params(("note_number" = String, Path, description = "Number of the dispatched note")),
    request_body = AdvanceInvoiceRequest,
    responses(
        (status = 201, description = "Advance invoice created"),
        (status = 404, description = "Note or worker not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "A conflicting document already exists", body = crate::errors::ErrorResponse)
    ),
    tag = "advance-invoices"
)]
pub async fn create_advance_invoice(
    State(state): State<AppState>,
    Path(note_number): Path<String>,
    Json(payload): Json<AdvanceInvoiceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let advance = state
        .services
        .billing
        .create_advance_invoice(
            &note_number,
            AdvanceInvoiceInput {
                worker_id: payload.worker_id,
                supply_days: payload.supply_days,
                advance_value: payload.advance_value,
            },
        )
        .await
        .map_err(map_service_error)?;
    Ok(created_response(advance))
}

#[utoipa::path(
    put,
    path = "/api/v1/advance-invoices/{note_number}",
    params(("note_number" = String, Path, description = "Note number")),
    request_body = AdvanceInvoiceUpdateRequest,
    responses(
        (status = 200, description = "Advance invoice updated"),
        (status = 404, description = "Advance invoice not found", body = crate::errors::ErrorResponse)
    ),
    tag = "advance-invoices"
)]
pub async fn update_advance_invoice(
    State(state): State<AppState>,
    Path(note_number): Path<String>,
    Json(payload): Json<AdvanceInvoiceUpdateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;
    let advance = state
        .services
        .billing
        .update_advance_invoice(
            &note_number,
            AdvanceInvoiceUpdate {
                worker_id: payload.worker_id,
                supply_days: payload.supply_days,
                state: payload.state,
                advance_value: payload.advance_value,
            },
        )
        .await
        .map_err(map_service_error)?;
    Ok(success_response(advance))
}

#[utoipa::path(
    get,
    path = "/api/v1/advance-invoices",
    responses((status = 200, description = "All advance invoices with their notes")),
    tag = "advance-invoices"
)]
pub async fn list_advance_invoices(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let advances = state
        .services
        .billing
        .list_advance_invoices()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(advances))
}

#[utoipa::path(
    get,
    path = "/api/v1/advance-invoices/{note_number}",
    params(("note_number" = String, Path, description = "Note number")),
    responses(
        (status = 200, description = "Advance invoice with the embedded note"),
        (status = 404, description = "Advance invoice not found", body = crate::errors::ErrorResponse)
    ),
    tag = "advance-invoices"
)]
pub async fn get_advance_invoice(
    State(state): State<AppState>,
    Path(note_number): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let detail = state
        .services
        .billing
        .get_advance_invoice(&note_number)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(detail))
}

#[utoipa::path(
    delete,
    path = "/api/v1/advance-invoices/{note_number}",
    params(("note_number" = String, Path, description = "Note number")),
    responses(
        (status = 204, description = "Advance invoice deleted"),
        (status = 404, description = "Advance invoice not found", body = crate::errors::ErrorResponse)
    ),
    tag = "advance-invoices"
)]
pub async fn delete_advance_invoice(
    State(state): State<AppState>,
    Path(note_number): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .billing
        .delete_advance_invoice(&note_number)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

pub fn receipt_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_receipts))
        .route("/:note_number", post(create_receipt))
        .route("/:note_number", get(get_receipt))
        .route("/:note_number", delete(delete_receipt))
}

pub fn invoice_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_invoices))
        .route("/:note_number", post(create_invoice))
        .route("/:note_number", put(update_invoice))
        .route("/:note_number", get(get_invoice))
        .route("/:note_number", delete(delete_invoice))
}

pub fn advance_invoice_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_advance_invoices))
        .route("/:note_number", post(create_advance_invoice))
        .route("/:note_number", put(update_advance_invoice))
        .route("/:note_number", get(get_advance_invoice))
        .route("/:note_number", delete(delete_advance_invoice))
}
