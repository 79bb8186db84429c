mod common;

use assert_matches::assert_matches;
use common::TestApp;
use furniture_pos::{
    entities::{chair, Chair, ProductType},
    errors::ServiceError,
    models::ListingEntry,
    services::CartListing,
};
use rust_decimal_macros::dec;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

#[tokio::test]
async fn test_listing_matches_printed_layout() {
    let app = TestApp::seeded().await;
    let carts = &app.services.carts;
    carts
        .add_item("Alice", ProductType::Chair, "CH-001", 3)
        .await
        .unwrap();
    carts
        .add_item("Alice", ProductType::Chair, "CH-001", 2)
        .await
        .unwrap();
    carts
        .add_item("Alice", ProductType::Bookshelf, "BS-004", 1)
        .await
        .unwrap();

    let listing = app
        .services
        .listing
        .list_cart_contents("Alice")
        .await
        .unwrap();

    let expected = concat!(
        "\n",
        "Shopping Cart Contents for Alice:\n",
        "----------------------------------------\n",
        "Item                 Quantity   Unit Price   Total Price \n",
        "----------------------------------------\n",
        "Chair CH-001         5          $299.00      $1495.00    \n",
        "Bookshelf BS-004     1          $649.00      $649.00     \n",
        "----------------------------------------\n",
        "Total                                        $2144.00\n",
        "----------------------------------------\n",
    );
    assert_eq!(listing.to_string(), expected);
}

#[tokio::test]
async fn test_empty_cart_is_not_an_error() {
    let app = TestApp::seeded().await;

    let listing = app
        .services
        .listing
        .list_cart_contents("Nobody")
        .await
        .unwrap();

    assert_matches!(&listing, CartListing::Empty { cart_id } if cart_id == "Nobody");
    assert_eq!(listing.to_string(), "No items found in cart for Nobody\n");
}

#[tokio::test]
async fn test_missing_product_becomes_warning_and_is_excluded_from_total() {
    let app = TestApp::seeded().await;
    let carts = &app.services.carts;
    carts
        .add_item("Alice", ProductType::Chair, "CH-002", 1)
        .await
        .unwrap();
    carts
        .add_item("Alice", ProductType::Chair, "CH-005", 2)
        .await
        .unwrap();

    Chair::delete_many()
        .filter(chair::Column::ModelNo.eq("CH-002"))
        .exec(&*app.db)
        .await
        .unwrap();

    let listing = app
        .services
        .listing
        .list_cart_contents("Alice")
        .await
        .unwrap();

    match &listing {
        CartListing::Populated { entries, .. } => {
            assert_eq!(entries.len(), 2);
            assert_matches!(
                &entries[0],
                ListingEntry::MissingProduct { product_type: ProductType::Chair, model_no }
                    if model_no == "CH-002"
            );
        }
        other => panic!("expected populated listing, got {:?}", other),
    }
    assert_eq!(listing.grand_total(), dec!(298));
    assert!(listing
        .to_string()
        .contains("Warning: Product Chair CH-002 not found\n"));
}

#[tokio::test]
async fn test_prices_are_read_at_listing_time() {
    let app = TestApp::seeded().await;
    app.services
        .carts
        .add_item("Alice", ProductType::Chair, "CH-003", 2)
        .await
        .unwrap();

    let ch_003 = Chair::find()
        .filter(chair::Column::ModelNo.eq("CH-003"))
        .one(&*app.db)
        .await
        .unwrap()
        .unwrap();
    let mut ch_003: chair::ActiveModel = ch_003.into();
    ch_003.price = Set(dec!(179.50));
    ch_003.update(&*app.db).await.unwrap();

    let listing = app
        .services
        .listing
        .list_cart_contents("Alice")
        .await
        .unwrap();

    assert_eq!(listing.grand_total(), dec!(359));
    assert!(listing.to_string().contains("$179.50      $359.00"));
}

#[tokio::test]
async fn test_total_overflow_is_an_error() {
    let app = TestApp::seeded().await;
    app.services
        .carts
        .add_item("Bob", ProductType::Chair, "CH-001", 50)
        .await
        .unwrap();

    let ch_001 = Chair::find()
        .filter(chair::Column::ModelNo.eq("CH-001"))
        .one(&*app.db)
        .await
        .unwrap()
        .unwrap();
    let mut ch_001: chair::ActiveModel = ch_001.into();
    ch_001.price = Set(dec!(10000000000000000000000000000));
    ch_001.update(&*app.db).await.unwrap();

    let err = app
        .services
        .listing
        .list_cart_contents("Bob")
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::InternalError(_));
}
