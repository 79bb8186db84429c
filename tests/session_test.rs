mod common;

use std::io::Cursor;

use common::TestApp;
use furniture_pos::{entities::ProductType, session::ShopSession};

const NAME_PROMPT: &str = "Enter user name (or 'END' to quit): ";
const MENU: &str = "\nSelect category to add to cart:\n1. Chair\n2. Bed\n3. Bookshelf\n4. DONE\nEnter choice (1-4): ";

async fn run_script(app: &TestApp, script: &str) -> String {
    let mut session = ShopSession::new(
        app.services.clone(),
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
    );
    session.run().await.expect("session failed");
    String::from_utf8(session.into_output()).expect("utf-8 output")
}

#[tokio::test]
async fn test_single_purchase_transcript() {
    let app = TestApp::seeded().await;

    let output = run_script(&app, "Bob\n2\nBD-005\n2\n4\nEND\n").await;

    let expected = [
        NAME_PROMPT,
        MENU,
        "\nAvailable Beds:\n",
        "Model: BD-001, Category: Wooden Bed - Double, Price: $1999.00, Stock: 10\n",
        "Model: BD-002, Category: Metal Bed - Double, Price: $1499.00, Stock: 15\n",
        "Model: BD-003, Category: Wooden Bed - Single, Price: $999.00, Stock: 8\n",
        "Model: BD-004, Category: Upholstered Bed - Queen, Price: $2499.00, Stock: 12\n",
        "Model: BD-005, Category: Metal Bed - Single, Price: $799.00, Stock: 20\n",
        "Enter model number for Bed: ",
        "Enter quantity: ",
        "Added 2 x Bed BD-005 to cart.\n",
        MENU,
        "\nShopping Cart Contents for Bob:\n",
        "----------------------------------------\n",
        "Item                 Quantity   Unit Price   Total Price \n",
        "----------------------------------------\n",
        "Bed BD-005           2          $799.00      $1598.00    \n",
        "----------------------------------------\n",
        "Total                                        $1598.00\n",
        "----------------------------------------\n",
        NAME_PROMPT,
    ]
    .concat();
    assert_eq!(output, expected);
}

#[tokio::test]
async fn test_bad_entries_are_reported_and_reprompted() {
    let app = TestApp::seeded().await;
    let script = "Alice\n9\n1\nCH-999\nCH-001\nabc\n0\n100\n3\n1\nCH-001\n2\n4\nend\n";

    let output = run_script(&app, script).await;

    let expected_in_order = [
        "Invalid choice. Please try again.\n",
        "\nAvailable Chairs:\n",
        "Invalid model number. Please try again.\n",
        "Invalid quantity. Please enter a number.\n",
        "Quantity must be a positive integer.\n",
        "Insufficient stock. Available: 50\n",
        "Added 3 x Chair CH-001 to cart.\n",
        "Added 2 x Chair CH-001 to cart.\n",
        "Chair CH-001         5          $299.00      $1495.00    \n",
        "Total                                        $1495.00\n",
    ];
    let mut rest = output.as_str();
    for fragment in expected_in_order {
        let at = rest
            .find(fragment)
            .unwrap_or_else(|| panic!("missing {:?} in output:\n{}", fragment, output));
        rest = &rest[at + fragment.len()..];
    }

    let listing = app
        .services
        .listing
        .list_cart_contents("Alice")
        .await
        .unwrap();
    assert_eq!(listing.lines().map(|l| l.quantity).sum::<i32>(), 5);
}

#[tokio::test]
async fn test_done_with_empty_cart_prints_indicator() {
    let app = TestApp::seeded().await;

    let output = run_script(&app, "Carol\n4\nEND\n").await;

    assert_eq!(
        output,
        [
            NAME_PROMPT,
            MENU,
            "No items found in cart for Carol\n",
            NAME_PROMPT
        ]
        .concat()
    );
}

#[tokio::test]
async fn test_shoppers_get_separate_carts() {
    let app = TestApp::seeded().await;
    let script = "Dan\n3\nBS-001\n1\n4\nErin\n3\nBS-001\n2\n4\nEND\n";

    let output = run_script(&app, script).await;

    assert!(output.contains("Shopping Cart Contents for Dan:"));
    assert!(output.contains("Shopping Cart Contents for Erin:"));
    let dan = app.services.listing.list_cart_contents("Dan").await.unwrap();
    let erin = app.services.listing.list_cart_contents("Erin").await.unwrap();
    assert_eq!(dan.lines().next().unwrap().quantity, 1);
    assert_eq!(erin.lines().next().unwrap().quantity, 2);
}

#[tokio::test]
async fn test_end_of_input_ends_session_quietly() {
    let app = TestApp::seeded().await;

    assert_eq!(run_script(&app, "").await, NAME_PROMPT);

    // Input running out mid-purchase leaves the cart untouched.
    let output = run_script(&app, "Frank\n1\nCH-002\n").await;
    assert!(output.ends_with("Enter quantity: "));
    let listing = app
        .services
        .listing
        .list_cart_contents("Frank")
        .await
        .unwrap();
    assert_eq!(listing.lines().count(), 0);
}

#[tokio::test]
async fn test_additions_merge_with_lines_from_earlier_visits() {
    let app = TestApp::seeded().await;
    app.services
        .carts
        .add_item("Gina", ProductType::Bed, "BD-003", 8)
        .await
        .unwrap();

    let output = run_script(&app, "Gina\n2\nBD-003\n1\n4\nEND\n").await;

    assert!(output.contains("Added 1 x Bed BD-003 to cart.\n"));
    assert!(output.contains("Bed BD-003           9"));
    assert!(output.ends_with(NAME_PROMPT));
}
