use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

use crate::config::AppConfig;
use crate::errors::{ApiError, ServiceError};

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Validate request input
pub fn validate_input<T: Validate>(input: &T) -> Result<(), ApiError> {
    input
        .validate()
        .map_err(|e| ApiError::ValidationError(format!("Validation failed: {}", e)))
}

/// Map service errors to API errors
pub fn map_service_error(err: ServiceError) -> ApiError {
    ApiError::ServiceError(err)
}

/// Raw pagination query parameters. Resolved against the configured
/// limits before use; a missing or out-of-range `per_page` never
/// reaches the paginator as-is.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PaginationParams {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl PaginationParams {
    /// Returns `(page, per_page)` with `page >= 1` and `per_page`
    /// defaulted from config and clamped to `1..=api_max_page_size`.
    pub fn resolve(&self, cfg: &AppConfig) -> (u64, u64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self
            .per_page
            .unwrap_or(cfg.api_default_page_size)
            .clamp(1, cfg.api_max_page_size);
        (page, per_page)
    }
}

/// Page of results plus the metadata needed to walk the rest.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: u64, per_page: u64, total: u64) -> Self {
        Self {
            data,
            pagination: PaginationMeta {
                page,
                per_page,
                total,
                total_pages: total.div_ceil(per_page.max(1)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> AppConfig {
        AppConfig::new(
            "sqlite::memory:".into(),
            "127.0.0.1".into(),
            0,
            "test".into(),
        )
    }

    #[test]
    fn missing_params_use_configured_defaults() {
        let (page, per_page) = PaginationParams::default().resolve(&cfg());
        assert_eq!(page, 1);
        assert_eq!(per_page, cfg().api_default_page_size);
    }

    #[test]
    fn zero_page_and_per_page_are_clamped_to_one() {
        let params = PaginationParams {
            page: Some(0),
            per_page: Some(0),
        };
        let (page, per_page) = params.resolve(&cfg());
        assert_eq!(page, 1);
        assert_eq!(per_page, 1);
    }

    #[test]
    fn per_page_is_capped_at_the_configured_maximum() {
        let params = PaginationParams {
            page: Some(2),
            per_page: Some(10_000),
        };
        let (_, per_page) = params.resolve(&cfg());
        assert_eq!(per_page, cfg().api_max_page_size);
    }

    #[test]
    fn empty_result_set_has_zero_pages() {
        let response = PaginatedResponse::<u8>::new(vec![], 1, 20, 0);
        assert_eq!(response.pagination.total_pages, 0);
    }

    #[test]
    fn partial_last_page_rounds_up() {
        let response = PaginatedResponse::new(vec![1, 2, 3], 1, 2, 5);
        assert_eq!(response.pagination.total_pages, 3);
    }
}
