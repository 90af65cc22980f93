mod common;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use backoffice_api::{
    domain::{Handover, NoteKind},
    errors::ServiceError,
    services::notes::{NoteInput, PositionInput},
};
use common::TestApp;

fn note_input(number: &str, from_store: i64, to_contractor: i64) -> NoteInput {
    NoteInput {
        kind: NoteKind::Dispatch,
        handover: Handover::External,
        number: number.to_string(),
        from_store_id: Some(from_store),
        from_shop_id: None,
        from_contractor_id: None,
        to_store_id: None,
        to_shop_id: None,
        to_contractor_id: Some(to_contractor),
        worker_id: None,
    }
}

#[tokio::test]
async fn note_totals_accumulate_position_values() {
    let app = TestApp::new().await;
    let note = app.seed_dispatch_note("WZ-1").await;

    assert_eq!(note.value_net, dec!(35.00));
    assert_eq!(note.tax_value, dec!(6.00));
    assert_eq!(note.value_gross, dec!(41.00));

    let detail = app.state.services.notes.get_note("WZ-1").await.unwrap();
    assert_eq!(detail.positions.len(), 2);
    assert_eq!(detail.positions[0].value_net, dec!(24.00));
    assert_eq!(detail.positions[0].tax_value, dec!(6.00));
    assert_eq!(detail.positions[0].value_gross, dec!(30.00));
    assert_eq!(detail.positions[1].value_net, dec!(11.00));
    assert_eq!(detail.positions[1].tax_value, Decimal::ZERO);
}

#[tokio::test]
async fn position_defaults_come_from_the_catalog() {
    let app = TestApp::new().await;
    let store = app.seed_store("central").await;
    let client = app.seed_client("Wozniak").await;
    let product = app.seed_product("bolt", dec!(7.25), 8).await;

    app.state
        .services
        .notes
        .create_note(note_input("WZ-2", store.id, client.id))
        .await
        .unwrap();

    let position = app
        .state
        .services
        .notes
        .add_position(
            "WZ-2",
            PositionInput {
                product_id: product.id,
                quantity: dec!(1),
                price_net: None,
                tax_rate: None,
                discount_value: Decimal::ZERO,
            },
        )
        .await
        .unwrap();

    assert_eq!(position.price_net, dec!(7.25));
    assert_eq!(position.tax_rate, 8);
    assert_eq!(position.value_net, dec!(7.25));
    assert_eq!(position.tax_value, dec!(0.58));
    assert_eq!(position.value_gross, dec!(7.83));
}

#[tokio::test]
async fn note_requires_exactly_one_from_and_to_reference() {
    let app = TestApp::new().await;
    let store = app.seed_store("north").await;
    let client = app.seed_client("Zielinski").await;

    let mut input = note_input("WZ-3", store.id, client.id);
    input.from_contractor_id = Some(client.id);

    let err = app
        .state
        .services
        .notes
        .create_note(input)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::ValidationError(_)));
}

#[tokio::test]
async fn duplicate_note_number_is_rejected() {
    let app = TestApp::new().await;
    let store = app.seed_store("south").await;
    let client = app.seed_client("Mazur").await;

    app.state
        .services
        .notes
        .create_note(note_input("WZ-4", store.id, client.id))
        .await
        .unwrap();
    let err = app
        .state
        .services
        .notes
        .create_note(note_input("WZ-4", store.id, client.id))
        .await
        .unwrap_err();

    match err {
        ServiceError::Conflict(msg) => assert_eq!(msg, "Note WZ-4 already exists"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn oversized_discount_is_rejected() {
    let app = TestApp::new().await;
    let store = app.seed_store("east").await;
    let client = app.seed_client("Lis").await;
    let product = app.seed_product("nut", dec!(3.00), 23).await;

    app.state
        .services
        .notes
        .create_note(note_input("WZ-5", store.id, client.id))
        .await
        .unwrap();

    let err = app
        .state
        .services
        .notes
        .add_position(
            "WZ-5",
            PositionInput {
                product_id: product.id,
                quantity: dec!(1),
                price_net: None,
                tax_rate: None,
                discount_value: dec!(3.50),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::ValidationError(_)));
}

#[tokio::test]
async fn deleting_a_note_removes_its_positions() {
    let app = TestApp::new().await;
    app.seed_dispatch_note("WZ-6").await;

    app.state.services.notes.delete_note("WZ-6").await.unwrap();

    let err = app
        .state
        .services
        .notes
        .get_note("WZ-6")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}
