//! Back-office API library
//!
//! Inventory, delivery-note, and billing-document management for a
//! small trade company.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod openapi;
pub mod services;

use axum::{extract::State, response::Json, routing::get, Router};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;

use services::{
    BillingService, ExportService, NoteService, PartyService, ProductService, StockService,
    WorkerService,
};

/// Services shared by the HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub products: ProductService,
    pub stock: StockService,
    pub parties: PartyService,
    pub workers: WorkerService,
    pub notes: NoteService,
    pub billing: BillingService,
    pub export: ExportService,
}

impl AppServices {
    pub fn new(db: Arc<DatabaseConnection>, cfg: &config::AppConfig) -> Self {
        Self {
            products: ProductService::new(db.clone()),
            stock: StockService::new(db.clone()),
            parties: PartyService::new(db.clone()),
            workers: WorkerService::new(db.clone()),
            notes: NoteService::new(db.clone()),
            billing: BillingService::new(db.clone()),
            export: ExportService::new(
                db,
                cfg.export_country.clone(),
                cfg.export_currency.clone(),
            ),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::AppConfig>,
    pub db: Arc<DatabaseConnection>,
    pub services: AppServices,
}

impl AppState {
    pub fn new(config: config::AppConfig, db: Arc<DatabaseConnection>) -> Self {
        let services = AppServices::new(db.clone(), &config);
        Self {
            config: Arc::new(config),
            db,
            services,
        }
    }
}

/// Full v1 API surface
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(api_status))
        .route("/health", get(health_check))
        .nest("/products", handlers::products::product_routes())
        .nest("/manufacturers", handlers::products::manufacturer_routes())
        .nest("/categories", handlers::products::category_routes())
        .nest("/stocks", handlers::stock::stock_routes())
        .nest("/stores", handlers::parties::store_routes())
        .nest("/shops", handlers::parties::shop_routes())
        .nest("/contractors", handlers::parties::contractor_routes())
        .nest("/workers", handlers::workers::worker_routes())
        .nest("/notes", handlers::notes::note_routes())
        .nest("/receipts", handlers::bills::receipt_routes())
        .nest("/invoices", handlers::bills::invoice_routes())
        .nest(
            "/advance-invoices",
            handlers::bills::advance_invoice_routes(),
        )
        .nest("/export", handlers::export::export_routes())
}

async fn api_status() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "backoffice-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let db_status = match state.db.ping().await {
        Ok(_) => "healthy",
        Err(_) => "unhealthy",
    };

    Json(json!({
        "status": db_status,
        "checks": {
            "database": db_status,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
