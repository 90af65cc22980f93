mod common;

use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use backoffice_api::{
    domain::DocumentState,
    entities::payment,
    errors::ServiceError,
    services::billing::{AdvanceInvoiceInput, InvoiceInput, InvoiceUpdate},
};
use common::TestApp;

#[tokio::test]
async fn receipt_copies_note_totals_and_opens_a_payment() {
    let app = TestApp::new().await;
    let note = app.seed_dispatch_note("WZ-10").await;

    let receipt = app
        .state
        .services
        .billing
        .create_receipt("WZ-10")
        .await
        .unwrap();

    assert_eq!(receipt.value_net, dec!(35.00));
    assert_eq!(receipt.tax_value, dec!(6.00));
    assert_eq!(receipt.value_gross, dec!(41.00));

    let payments = payment::Entity::find()
        .filter(payment::Column::NoteId.eq(note.id))
        .all(&*app.state.db)
        .await
        .unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].receipt_id, Some(receipt.id));
    assert!(!payments[0].advance);
    assert!(!payments[0].paid);
}

#[tokio::test]
async fn second_receipt_for_a_note_is_rejected() {
    let app = TestApp::new().await;
    app.seed_dispatch_note("WZ-11").await;

    app.state
        .services
        .billing
        .create_receipt("WZ-11")
        .await
        .unwrap();
    let err = app
        .state
        .services
        .billing
        .create_receipt("WZ-11")
        .await
        .unwrap_err();

    match err {
        ServiceError::Conflict(msg) => assert_eq!(msg, "Receipt has been already created"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn advance_blocks_a_later_receipt() {
    let app = TestApp::new().await;
    app.seed_dispatch_note("WZ-12").await;
    let worker = app.seed_worker().await;

    app.state
        .services
        .billing
        .create_advance_invoice(
            "WZ-12",
            AdvanceInvoiceInput {
                worker_id: worker.id,
                supply_days: 7,
                advance_value: dec!(20.50),
            },
        )
        .await
        .unwrap();

    let err = app
        .state
        .services
        .billing
        .create_receipt("WZ-12")
        .await
        .unwrap_err();
    match err {
        ServiceError::Conflict(msg) => assert_eq!(msg, "Advance invoice has been already created"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn receipt_blocks_a_later_advance() {
    let app = TestApp::new().await;
    app.seed_dispatch_note("WZ-13").await;
    let worker = app.seed_worker().await;

    app.state
        .services
        .billing
        .create_receipt("WZ-13")
        .await
        .unwrap();

    let err = app
        .state
        .services
        .billing
        .create_advance_invoice(
            "WZ-13",
            AdvanceInvoiceInput {
                worker_id: worker.id,
                supply_days: 7,
                advance_value: dec!(10.00),
            },
        )
        .await
        .unwrap_err();
    match err {
        ServiceError::Conflict(msg) => {
            assert_eq!(msg, "Receipt for given note has been already created")
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn advance_splits_the_paid_amount_proportionally() {
    let app = TestApp::new().await;
    let note = app.seed_dispatch_note("WZ-14").await;
    let worker = app.seed_worker().await;

    // 20.50 of a 41.00 gross note: tax share 20.50 * 6.00 / 41.00 = 3.00
    let advance = app
        .state
        .services
        .billing
        .create_advance_invoice(
            "WZ-14",
            AdvanceInvoiceInput {
                worker_id: worker.id,
                supply_days: 5,
                advance_value: dec!(20.50),
            },
        )
        .await
        .unwrap();

    assert_eq!(advance.advance_value, dec!(20.50));
    assert_eq!(advance.tax_value, dec!(3.00));
    assert_eq!(advance.value_net, dec!(17.50));
    assert_eq!(advance.value_gross, dec!(20.50));
    assert_eq!(advance.rest_value_net, Some(dec!(17.50)));
    assert_eq!(advance.rest_tax_value, Some(dec!(3.00)));
    assert_eq!(advance.rest_value_gross, Some(dec!(20.50)));

    let today = Utc::now().date_naive();
    assert_eq!(advance.supply_date, today + Duration::days(5));
    assert_eq!(advance.maturity, today + Duration::days(30));

    // The advance opens its own payment row next to none for the note
    let payments = payment::Entity::find()
        .filter(payment::Column::NoteId.eq(note.id))
        .all(&*app.state.db)
        .await
        .unwrap();
    assert_eq!(payments.len(), 1);
    assert!(payments[0].advance);
    assert_eq!(payments[0].advance_invoice_id, Some(advance.id));
}

#[tokio::test]
async fn invoice_after_an_advance_carries_the_rest_values() {
    let app = TestApp::new().await;
    app.seed_dispatch_note("WZ-15").await;
    let worker = app.seed_worker().await;

    app.state
        .services
        .billing
        .create_advance_invoice(
            "WZ-15",
            AdvanceInvoiceInput {
                worker_id: worker.id,
                supply_days: 5,
                advance_value: dec!(20.50),
            },
        )
        .await
        .unwrap();

    let invoice = app
        .state
        .services
        .billing
        .create_invoice(
            "WZ-15",
            InvoiceInput {
                worker_id: worker.id,
                supply_days: 3,
            },
        )
        .await
        .unwrap();

    assert_eq!(invoice.value_net, dec!(17.50));
    assert_eq!(invoice.tax_value, dec!(3.00));
    assert_eq!(invoice.value_gross, dec!(20.50));
    assert_eq!(invoice.state, "in_progress");
}

#[tokio::test]
async fn invoice_without_an_advance_copies_note_totals() {
    let app = TestApp::new().await;
    app.seed_dispatch_note("WZ-16").await;
    let worker = app.seed_worker().await;

    let invoice = app
        .state
        .services
        .billing
        .create_invoice(
            "WZ-16",
            InvoiceInput {
                worker_id: worker.id,
                supply_days: 3,
            },
        )
        .await
        .unwrap();

    assert_eq!(invoice.value_net, dec!(35.00));
    assert_eq!(invoice.tax_value, dec!(6.00));
    assert_eq!(invoice.value_gross, dec!(41.00));
}

#[tokio::test]
async fn updating_an_invoice_moves_state_and_supply_date() {
    let app = TestApp::new().await;
    app.seed_dispatch_note("WZ-17").await;
    let worker = app.seed_worker().await;

    app.state
        .services
        .billing
        .create_invoice(
            "WZ-17",
            InvoiceInput {
                worker_id: worker.id,
                supply_days: 3,
            },
        )
        .await
        .unwrap();

    let updated = app
        .state
        .services
        .billing
        .update_invoice(
            "WZ-17",
            InvoiceUpdate {
                worker_id: worker.id,
                supply_days: 10,
                state: DocumentState::Executed,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.state, "executed");
    assert_eq!(
        updated.supply_date,
        Utc::now().date_naive() + Duration::days(10)
    );
}

#[tokio::test]
async fn deleting_a_receipt_removes_its_payment() {
    let app = TestApp::new().await;
    let note = app.seed_dispatch_note("WZ-18").await;

    app.state
        .services
        .billing
        .create_receipt("WZ-18")
        .await
        .unwrap();
    app.state
        .services
        .billing
        .delete_receipt("WZ-18")
        .await
        .unwrap();

    let payments = payment::Entity::find()
        .filter(payment::Column::NoteId.eq(note.id))
        .all(&*app.state.db)
        .await
        .unwrap();
    assert!(payments.is_empty());

    let err = app
        .state
        .services
        .billing
        .get_receipt("WZ-18")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn a_note_with_documents_cannot_be_deleted() {
    let app = TestApp::new().await;
    app.seed_dispatch_note("WZ-19").await;

    app.state
        .services
        .billing
        .create_receipt("WZ-19")
        .await
        .unwrap();

    let err = app
        .state
        .services
        .notes
        .delete_note("WZ-19")
        .await
        .unwrap_err();
    match err {
        ServiceError::Conflict(msg) => assert_eq!(msg, "Note has financial documents"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn documents_are_only_issued_for_external_dispatches() {
    let app = TestApp::new().await;
    let store = app.seed_store("west").await;
    let client = app.seed_client("Kaczmarek").await;

    app.state
        .services
        .notes
        .create_note(backoffice_api::services::notes::NoteInput {
            kind: backoffice_api::domain::NoteKind::Supply,
            handover: backoffice_api::domain::Handover::External,
            number: "PZ-1".to_string(),
            from_store_id: None,
            from_shop_id: None,
            from_contractor_id: Some(client.id),
            to_store_id: Some(store.id),
            to_shop_id: None,
            to_contractor_id: None,
            worker_id: None,
        })
        .await
        .unwrap();

    let err = app
        .state
        .services
        .billing
        .create_receipt("PZ-1")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn receipt_detail_embeds_the_note_with_positions() {
    let app = TestApp::new().await;
    app.seed_dispatch_note("WZ-20").await;

    app.state
        .services
        .billing
        .create_receipt("WZ-20")
        .await
        .unwrap();
    let detail = app
        .state
        .services
        .billing
        .get_receipt("WZ-20")
        .await
        .unwrap();

    assert_eq!(detail.note.number, "WZ-20");
    assert_eq!(detail.note.positions.len(), 2);
    assert_eq!(detail.note.positions[0].product_name, "widget");
    assert_eq!(detail.note.value_gross, dec!(41.00));
    assert!(detail.note.to_contractor.is_some());
}
