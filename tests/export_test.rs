mod common;

use common::TestApp;

#[tokio::test]
async fn export_renders_one_row_per_position() {
    let app = TestApp::new().await;
    app.seed_dispatch_note("WZ-30").await;

    let csv = app.state.services.export.build_csv(None).await.unwrap();
    let lines: Vec<&str> = csv.trim_end().lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "marketplace,country,invoice_id,transaction_id,transaction_time,\
         transaction_type,item_name,item_type,units,marketplace_currency,\
         sales_price,estimated_earnings,client_id,receipt_id"
    );

    let first: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(first[0], "Warsaw");
    assert_eq!(first[1], "PL");
    assert_eq!(first[2], "");
    assert_eq!(first[3], "WZ-30");
    assert_eq!(first[5], "dispatch");
    assert_eq!(first[6], "widget");
    assert_eq!(first[8], "pcs");
    assert_eq!(first[9], "PLN");
    let sales_price: rust_decimal::Decimal = first[10].parse().unwrap();
    let earnings: rust_decimal::Decimal = first[11].parse().unwrap();
    assert_eq!(sales_price, rust_decimal_macros::dec!(10.00));
    assert_eq!(earnings, rust_decimal_macros::dec!(6.00));
}

#[tokio::test]
async fn export_includes_document_ids_once_issued() {
    let app = TestApp::new().await;
    app.seed_dispatch_note("WZ-31").await;

    let receipt = app
        .state
        .services
        .billing
        .create_receipt("WZ-31")
        .await
        .unwrap();

    let csv = app.state.services.export.build_csv(None).await.unwrap();
    let lines: Vec<&str> = csv.trim_end().lines().collect();
    let first: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(first[13], receipt.id.to_string());
}

#[tokio::test]
async fn single_note_export_ignores_the_dispatch_filter() {
    let app = TestApp::new().await;
    let store = app.seed_store("depot").await;
    let client = app.seed_client("Grabowski").await;
    let product = app
        .seed_product("cable", rust_decimal_macros::dec!(9.99), 23)
        .await;

    app.state
        .services
        .notes
        .create_note(backoffice_api::services::notes::NoteInput {
            kind: backoffice_api::domain::NoteKind::Dispatch,
            handover: backoffice_api::domain::Handover::Internal,
            number: "WZ-32".to_string(),
            from_store_id: Some(store.id),
            from_shop_id: None,
            from_contractor_id: None,
            to_store_id: None,
            to_shop_id: None,
            to_contractor_id: Some(client.id),
            worker_id: None,
        })
        .await
        .unwrap();
    app.state
        .services
        .notes
        .add_position(
            "WZ-32",
            backoffice_api::services::notes::PositionInput {
                product_id: product.id,
                quantity: rust_decimal_macros::dec!(1),
                price_net: None,
                tax_rate: None,
                discount_value: rust_decimal::Decimal::ZERO,
            },
        )
        .await
        .unwrap();

    // The all-notes export only covers external dispatches
    let all = app.state.services.export.build_csv(None).await.unwrap();
    assert_eq!(all.trim_end().lines().count(), 1);

    // Asking for the note by number exports it regardless
    let one = app
        .state
        .services
        .export
        .build_csv(Some("WZ-32"))
        .await
        .unwrap();
    let lines: Vec<&str> = one.trim_end().lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("cable"));
}
