use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Back-office API",
        version = "0.1.0",
        description = r#"
Back-office API for a small trade company: product catalog, stock
tracking, delivery notes, and the billing documents issued for
external dispatches (receipts, invoices, advance invoices).

Billing endpoints are keyed by the note number of the dispatched
delivery note rather than a surrogate id.
        "#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers((url = "http://localhost:8080", description = "Local development")),
    tags(
        (name = "receipts", description = "Receipts for dispatched notes"),
        (name = "invoices", description = "Invoices for dispatched notes"),
        (name = "advance-invoices", description = "Advance invoices for dispatched notes")
    ),
    paths(
        crate::handlers::bills::create_receipt,
        crate::handlers::bills::list_receipts,
        crate::handlers::bills::get_receipt,
        crate::handlers::bills::delete_receipt,
        crate::handlers::bills::create_invoice,
        crate::handlers::bills::update_invoice,
        crate::handlers::bills::list_invoices,
        crate::handlers::bills::get_invoice,
        crate::handlers::bills::delete_invoice,
        crate::handlers::bills::create_advance_invoice,
        crate::handlers::bills::update_advance_invoice,
        crate::handlers::bills::list_advance_invoices,
        crate::handlers::bills::get_advance_invoice,
        crate::handlers::bills::delete_advance_invoice,
    ),
    components(schemas(
        crate::handlers::bills::InvoiceRequest,
        crate::handlers::bills::InvoiceUpdateRequest,
        crate::handlers::bills::AdvanceInvoiceRequest,
        crate::handlers::bills::AdvanceInvoiceUpdateRequest,
        crate::domain::DocumentState,
        crate::errors::ErrorResponse
    ))
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDocV1::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_lists_billing_paths() {
        let openapi = ApiDocV1::openapi();
        let json = serde_json::to_string(&openapi).unwrap();
        assert!(json.contains("/api/v1/receipts"));
        assert!(json.contains("/api/v1/invoices/{note_number}"));
        assert!(json.contains("/api/v1/advance-invoices/{note_number}"));
    }
}
