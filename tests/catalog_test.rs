mod common;

use rust_decimal_macros::dec;

use backoffice_api::domain::ContractorKind;
use backoffice_api::errors::ServiceError;
use backoffice_api::services::parties::{ContractorInput, UnitInput};

use common::TestApp;

#[tokio::test]
async fn manufacturer_in_use_cannot_be_deleted() {
    let app = TestApp::new().await;
    let product = app.seed_product("widget", dec!(10.00), 23).await;

    let err = app
        .state
        .services
        .products
        .delete_manufacturer(product.manufacturer_id)
        .await
        .unwrap_err();
    match err {
        ServiceError::Conflict(msg) => assert_eq!(msg, "Manufacturer is referenced by products"),
        other => panic!("unexpected error: {:?}", other),
    }

    // Once the product is gone the manufacturer can follow.
    app.state
        .services
        .products
        .delete_product(product.id)
        .await
        .unwrap();
    app.state
        .services
        .products
        .delete_manufacturer(product.manufacturer_id)
        .await
        .unwrap();
}

#[tokio::test]
async fn category_in_use_cannot_be_deleted() {
    let app = TestApp::new().await;
    let product = app.seed_product("gadget", dec!(5.50), 0).await;

    let err = app
        .state
        .services
        .products
        .delete_category(product.category_id)
        .await
        .unwrap_err();
    match err {
        ServiceError::Conflict(msg) => assert_eq!(msg, "Category is referenced by products"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn renaming_a_manufacturer() {
    let app = TestApp::new().await;
    let manufacturer = app
        .state
        .services
        .products
        .create_manufacturer("Acme".to_string())
        .await
        .unwrap();

    let renamed = app
        .state
        .services
        .products
        .update_manufacturer(manufacturer.id, "Acme Industries".to_string())
        .await
        .unwrap();
    assert_eq!(renamed.name, "Acme Industries");

    let err = app
        .state
        .services
        .products
        .update_manufacturer(9999, "Nobody".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn updating_a_store_keeps_its_stock_ledger() {
    let app = TestApp::new().await;
    let store = app.seed_store("central").await;

    let updated = app
        .state
        .services
        .parties
        .update_store(
            store.id,
            UnitInput {
                name: "central".to_string(),
                address: "Nowa 5".to_string(),
                postal_code: "80-001".to_string(),
                city: "Gdansk".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.city, "Gdansk");
    assert_eq!(updated.stock_id, store.stock_id);
}

#[tokio::test]
async fn updating_a_contractor_changes_its_details() {
    let app = TestApp::new().await;
    let client = app.seed_client("Kowalski").await;

    let updated = app
        .state
        .services
        .parties
        .update_contractor(
            client.id,
            ContractorInput {
                kind: ContractorKind::Client,
                company_name: Some("Kowalski i Syn".to_string()),
                address: client.address.clone(),
                postal_code: client.postal_code.clone(),
                city: client.city.clone(),
                first_name: client.first_name.clone(),
                last_name: client.last_name.clone(),
                email: "biuro@kowalski.example.com".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.company_name.as_deref(), Some("Kowalski i Syn"));
    assert_eq!(updated.email, "biuro@kowalski.example.com");
}
