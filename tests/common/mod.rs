#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use backoffice_api::{
    config::AppConfig,
    db::{self, DbConfig},
    domain::{ContractorKind, Handover, NoteKind, ProductGroup},
    entities::{contractor, note, product, store, worker},
    services::{
        notes::{NoteInput, PositionInput},
        parties::{ContractorInput, UnitInput},
        products::ProductInput,
        workers::WorkerInput,
    },
    AppState,
};

/// Application state backed by a fresh in-memory SQLite database.
pub struct TestApp {
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        let cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            0,
            "test".to_string(),
        );

        // A single connection keeps the in-memory database alive for the
        // whole test.
        let db_cfg = DbConfig {
            url: cfg.database_url.clone(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        };
        let pool = db::establish_connection_with_config(&db_cfg)
            .await
            .expect("failed to open test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations");

        Self {
            state: AppState::new(cfg, Arc::new(pool)),
        }
    }

    pub async fn seed_store(&self, name: &str) -> store::Model {
        self.state
            .services
            .parties
            .create_store(UnitInput {
                name: name.to_string(),
                address: "Polna 1".to_string(),
                postal_code: "00-001".to_string(),
                city: "Warsaw".to_string(),
            })
            .await
            .expect("failed to create store")
    }

    pub async fn seed_client(&self, last_name: &str) -> contractor::Model {
        self.state
            .services
            .parties
            .create_contractor(ContractorInput {
                kind: ContractorKind::Client,
                company_name: None,
                address: "Krotka 2".to_string(),
                postal_code: "00-002".to_string(),
                city: "Krakow".to_string(),
                first_name: "Jan".to_string(),
                last_name: last_name.to_string(),
                email: format!("{}@example.com", last_name.to_lowercase()),
            })
            .await
            .expect("failed to create contractor")
    }

    pub async fn seed_worker(&self) -> worker::Model {
        self.state
            .services
            .workers
            .create_worker(WorkerInput {
                first_name: "Anna".to_string(),
                last_name: "Nowak".to_string(),
                position: "salesperson".to_string(),
                email: "anna.nowak@example.com".to_string(),
                active: true,
            })
            .await
            .expect("failed to create worker")
    }

    pub async fn seed_product(
        &self,
        name: &str,
        sales_price_net: Decimal,
        tax_rate: i32,
    ) -> product::Model {
        let manufacturer = self
            .state
            .services
            .products
            .create_manufacturer(format!("{} maker", name))
            .await
            .expect("failed to create manufacturer");
        let category = self
            .state
            .services
            .products
            .create_category(format!("{} goods", name))
            .await
            .expect("failed to create category");

        self.state
            .services
            .products
            .create_product(ProductInput {
                name: name.to_string(),
                group: ProductGroup::A,
                code: format!("{}-001", name.to_uppercase()),
                batch_number: "B1".to_string(),
                unit: "pcs".to_string(),
                purchase_price: dec!(4.00),
                sales_price_net,
                tax_rate,
                best_before_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
                description: String::new(),
                manufacturer_id: manufacturer.id,
                category_id: category.id,
            })
            .await
            .expect("failed to create product")
    }

    /// External dispatch note from a store to a client, with two
    /// positions. Totals come out to 35.00 net, 6.00 tax, 41.00 gross.
    pub async fn seed_dispatch_note(&self, number: &str) -> note::Model {
        let store = self.seed_store(&format!("store {}", number)).await;
        let client = self.seed_client("Kowalski").await;
        let widget = self.seed_product("widget", dec!(10.00), 25).await;
        let gadget = self.seed_product("gadget", dec!(5.50), 0).await;

        self.state
            .services
            .notes
            .create_note(NoteInput {
                kind: NoteKind::Dispatch,
                handover: Handover::External,
                number: number.to_string(),
                from_store_id: Some(store.id),
                from_shop_id: None,
                from_contractor_id: None,
                to_store_id: None,
                to_shop_id: None,
                to_contractor_id: Some(client.id),
                worker_id: None,
            })
            .await
            .expect("failed to create note");

        // (10.00 - 2.00) * 3 at 25% -> 24.00 / 6.00 / 30.00
        self.state
            .services
            .notes
            .add_position(
                number,
                PositionInput {
                    product_id: widget.id,
                    quantity: dec!(3),
                    price_net: None,
                    tax_rate: None,
                    discount_value: dec!(2.00),
                },
            )
            .await
            .expect("failed to add position");

        // 5.50 * 2 at 0% -> 11.00 / 0.00 / 11.00
        self.state
            .services
            .notes
            .add_position(
                number,
                PositionInput {
                    product_id: gadget.id,
                    quantity: dec!(2),
                    price_net: None,
                    tax_rate: None,
                    discount_value: Decimal::ZERO,
                },
            )
            .await
            .expect("failed to add position");

        self.state
            .services
            .notes
            .get_note(number)
            .await
            .expect("failed to reload note")
            .note
    }
}
