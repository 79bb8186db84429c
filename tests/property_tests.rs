//! Property-based tests for cart merging and quantity entry.

mod common;

use common::TestApp;
use furniture_pos::{
    entities::ProductType,
    models::CartLineRequest,
    session::{parse_quantity, QuantityError},
};
use proptest::prelude::*;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime")
}

fn product_strategy() -> impl Strategy<Value = (ProductType, &'static str, i32)> {
    prop_oneof![
        Just((ProductType::Chair, "CH-003", 20)),
        Just((ProductType::Bed, "BD-003", 8)),
        Just((ProductType::Bookshelf, "BS-003", 15)),
    ]
}

// Property: repeated additions collapse into one line holding the sum
proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn merged_quantity_is_sum_of_additions(
        (product_type, model_no, stock) in product_strategy(),
        picks in prop::collection::vec(1i32..=100, 1..6),
    ) {
        let quantities: Vec<i32> = picks.iter().map(|q| (q - 1) % stock + 1).collect();

        let (line_count, quantity) = runtime().block_on(async {
            let app = TestApp::seeded().await;
            let mut last = None;
            for quantity in &quantities {
                let request = CartLineRequest::new(
                    "Prop",
                    product_type.to_string(),
                    model_no,
                    *quantity,
                );
                let lines = app
                    .services
                    .carts
                    .insert_cart_items(&[request])
                    .await
                    .expect("addition within stock");
                last = lines.into_iter().last();
            }
            (app.counts().await.cart_items, last.map(|l| l.quantity))
        });

        prop_assert_eq!(line_count, 1);
        prop_assert_eq!(quantity, Some(quantities.iter().sum::<i32>()));
    }
}

// Property: a typed quantity is accepted exactly when it is within 1..=stock
proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn quantity_entry_accepts_only_positive_amounts_within_stock(
        quantity in -50i32..200,
        stock in 0i32..100,
    ) {
        let result = parse_quantity(&quantity.to_string(), stock);
        if quantity <= 0 {
            prop_assert_eq!(result, Err(QuantityError::NotPositive));
        } else if quantity > stock {
            prop_assert_eq!(result, Err(QuantityError::ExceedsStock(stock)));
        } else {
            prop_assert_eq!(result, Ok(quantity));
        }
    }

    #[test]
    fn non_numeric_quantities_are_rejected(raw in "[a-zA-Z ]{1,8}") {
        prop_assert_eq!(parse_quantity(&raw, 10), Err(QuantityError::NotANumber));
    }
}
