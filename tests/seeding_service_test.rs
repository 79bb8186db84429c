mod common;

use assert_matches::assert_matches;
use common::TestApp;
use furniture_pos::{
    catalog::default_catalog,
    entities::{chair, Chair, WarehouseLocation},
    errors::ServiceError,
    models::{ChairRecord, ProductBase, ProductRecord},
    services::SeedReport,
};
use rust_decimal_macros::dec;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

fn chair_record(model_no: &str, warehouse_location: &str) -> ProductRecord {
    ProductRecord::Chair(ChairRecord {
        base: ProductBase {
            category: "Stool".into(),
            warehouse_location: warehouse_location.into(),
            model_no: model_no.into(),
            stock_level: 5,
            price: dec!(89.5),
            material: "Oak".into(),
            width: 35.0,
            height: 60.0,
            depth: 35.0,
        },
        has_armrests: false,
        max_weight: 90.0,
        has_sitting_pad: false,
    })
}

#[tokio::test]
async fn test_seed_default_catalog() {
    let app = TestApp::new().await;

    let report = app.seed().await;

    assert_eq!(
        report,
        SeedReport {
            inserted: 15,
            skipped: 0
        }
    );
    let counts = app.counts().await;
    assert_eq!(counts.chairs, 5);
    assert_eq!(counts.beds, 5);
    assert_eq!(counts.bookshelves, 5);
    assert_eq!(counts.cart_items, 0);
}

#[tokio::test]
async fn test_reseeding_is_idempotent() {
    let app = TestApp::seeded().await;
    let before = app.counts().await;

    let report = app.seed().await;

    assert_eq!(report.inserted, 0);
    assert_eq!(report.skipped, 15);
    assert_eq!(app.counts().await, before);
}

#[tokio::test]
async fn test_seeded_rows_keep_catalog_values() {
    let app = TestApp::seeded().await;

    let ch_002 = Chair::find()
        .filter(chair::Column::ModelNo.eq("CH-002"))
        .one(&*app.db)
        .await
        .unwrap()
        .expect("CH-002 seeded");

    assert_eq!(ch_002.category, "Metal Chair");
    assert_eq!(ch_002.warehouse_location, WarehouseLocation::Mongkok);
    assert_eq!(ch_002.stock_level, 30);
    assert_eq!(ch_002.price, dec!(349));
    assert!(ch_002.has_armrests);
    assert_eq!(ch_002.max_weight, 150.0);
}

#[tokio::test]
async fn test_unknown_location_rejects_whole_batch() {
    let app = TestApp::new().await;
    let records = vec![chair_record("CH-100", "FanLing"), chair_record("CH-101", "Shatin")];

    let err = app
        .services
        .seeding
        .insert_furniture(&records)
        .await
        .unwrap_err();

    assert_matches!(err, ServiceError::ValidationError(msg) if msg.contains("Shatin"));
    assert_eq!(app.counts().await.chairs, 0);
}

#[tokio::test]
async fn test_duplicate_model_in_one_batch_is_skipped() {
    let app = TestApp::new().await;
    let records = vec![chair_record("CH-200", "Mongkok"), chair_record("CH-200", "FanLing")];

    let report = app
        .services
        .seeding
        .insert_furniture(&records)
        .await
        .unwrap();

    assert_eq!(report.inserted, 1);
    assert_eq!(report.skipped, 1);

    let stored = Chair::find()
        .filter(chair::Column::ModelNo.eq("CH-200"))
        .one(&*app.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.warehouse_location, WarehouseLocation::Mongkok);
}

#[tokio::test]
async fn test_same_model_number_allowed_across_variants() {
    let app = TestApp::seeded().await;
    let mut records = default_catalog();
    // A bed reusing a chair's model number lives in its own table.
    assert_eq!(records[5].model_no(), "BD-001");
    records[5].base_mut().model_no = "CH-001".into();

    let report = app
        .services
        .seeding
        .insert_furniture(&records)
        .await
        .unwrap();

    assert_eq!(report.inserted, 1);
    assert_eq!(app.counts().await.beds, 6);
}

#[tokio::test]
async fn test_negative_stock_is_rejected() {
    let app = TestApp::new().await;
    let mut record = chair_record("CH-300", "FanLing");
    record.base_mut().stock_level = -4;

    let err = app
        .services
        .seeding
        .insert_furniture(&[record])
        .await
        .unwrap_err();

    assert_matches!(err, ServiceError::ValidationError(_));
    assert_eq!(app.counts().await.chairs, 0);
}

#[tokio::test]
async fn test_price_beyond_column_precision_is_rejected() {
    let app = TestApp::new().await;
    let mut record = chair_record("CH-400", "FanLing");
    record.base_mut().price = dec!(10000000000000000000000000000);

    let err = app
        .services
        .seeding
        .insert_furniture(&[record])
        .await
        .unwrap_err();

    assert_matches!(err, ServiceError::ValidationError(_));
    assert_eq!(app.counts().await.chairs, 0);
}
