//! Built-in store catalog and catalog file loading.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::path::Path;

use crate::errors::ServiceError;
use crate::models::{BedRecord, BookshelfRecord, ChairRecord, ProductBase, ProductRecord};

fn base(
    model_no: &str,
    category: &str,
    warehouse_location: &str,
    stock_level: i32,
    price: Decimal,
    material: &str,
    (width, height, depth): (f64, f64, f64),
) -> ProductBase {
    ProductBase {
        category: category.to_string(),
        warehouse_location: warehouse_location.to_string(),
        model_no: model_no.to_string(),
        stock_level,
        price,
        material: material.to_string(),
        width,
        height,
        depth,
    }
}

fn chair(
    base: ProductBase,
    has_armrests: bool,
    max_weight: f64,
    has_sitting_pad: bool,
) -> ProductRecord {
    ProductRecord::Chair(ChairRecord {
        base,
        has_armrests,
        max_weight,
        has_sitting_pad,
    })
}

fn bed(base: ProductBase, bed_size: &str, has_headboard: bool) -> ProductRecord {
    ProductRecord::Bed(BedRecord {
        base,
        bed_size: bed_size.to_string(),
        has_headboard,
    })
}

fn bookshelf(base: ProductBase, shelf_layers: i32, maximum_weight: f64) -> ProductRecord {
    ProductRecord::Bookshelf(BookshelfRecord {
        base,
        shelf_layers,
        maximum_weight,
    })
}

/// The store's standard stock: five chairs, five beds and five bookshelves.
pub fn default_catalog() -> Vec<ProductRecord> {
    vec![
        chair(
            base("CH-001", "Wooden Chair", "FanLing", 50, dec!(299.0), "Wood", (45.0, 85.0, 50.0)),
            false,
            120.0,
            true,
        ),
        chair(
            base("CH-002", "Metal Chair", "Mongkok", 30, dec!(349.0), "Metal", (50.0, 90.0, 55.0)),
            true,
            150.0,
            true,
        ),
        chair(
            base(
                "CH-003",
                "Plastic Chair",
                "FanLing",
                20,
                dec!(199.0),
                "Plastic",
                (40.0, 80.0, 45.0),
            ),
            false,
            100.0,
            false,
        ),
        chair(
            base(
                "CH-004",
                "Ergonomic Chair",
                "Mongkok",
                25,
                dec!(499.0),
                "Mesh",
                (48.0, 95.0, 52.0),
            ),
            true,
            130.0,
            true,
        ),
        chair(
            base(
                "CH-005",
                "Folding Chair",
                "FanLing",
                40,
                dec!(149.0),
                "Aluminum",
                (42.0, 78.0, 48.0),
            ),
            false,
            110.0,
            false,
        ),
        bed(
            base(
                "BD-001",
                "Wooden Bed - Double",
                "FanLing",
                10,
                dec!(1999.0),
                "Wood",
                (200.0, 40.0, 160.0),
            ),
            "Double",
            true,
        ),
        bed(
            base(
                "BD-002",
                "Metal Bed - Double",
                "Mongkok",
                15,
                dec!(1499.0),
                "Metal",
                (180.0, 35.0, 150.0),
            ),
            "Double",
            false,
        ),
        bed(
            base(
                "BD-003",
                "Wooden Bed - Single",
                "FanLing",
                8,
                dec!(999.0),
                "Wood",
                (150.0, 30.0, 120.0),
            ),
            "Single",
            true,
        ),
        bed(
            base(
                "BD-004",
                "Upholstered Bed - Queen",
                "Mongkok",
                12,
                dec!(2499.0),
                "Fabric",
                (210.0, 45.0, 170.0),
            ),
            "Queen",
            true,
        ),
        bed(
            base(
                "BD-005",
                "Metal Bed - Single",
                "FanLing",
                20,
                dec!(799.0),
                "Metal",
                (140.0, 32.0, 110.0),
            ),
            "Single",
            false,
        ),
        bookshelf(
            base(
                "BS-001",
                "Wooden Book Shelf - Small Size",
                "FanLing",
                25,
                dec!(599.0),
                "Wood",
                (80.0, 180.0, 30.0),
            ),
            5,
            25.0,
        ),
        bookshelf(
            base(
                "BS-002",
                "Metal Book Shelf",
                "Mongkok",
                30,
                dec!(499.0),
                "Metal",
                (70.0, 160.0, 25.0),
            ),
            4,
            20.0,
        ),
        bookshelf(
            base(
                "BS-003",
                "Wooden Book Shelf - Big Size",
                "FanLing",
                15,
                dec!(799.0),
                "Wood",
                (90.0, 200.0, 35.0),
            ),
            6,
            30.0,
        ),
        bookshelf(
            base(
                "BS-004",
                "Corner Bookshelf",
                "Mongkok",
                18,
                dec!(649.0),
                "Wood",
                (60.0, 170.0, 40.0),
            ),
            4,
            22.0,
        ),
        bookshelf(
            base(
                "BS-005",
                "Tall Metal Bookshelf",
                "FanLing",
                22,
                dec!(699.0),
                "Metal",
                (75.0, 190.0, 30.0),
            ),
            5,
            28.0,
        ),
    ]
}

/// Reads a JSON array of `product_type`-tagged records.
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Vec<ProductRecord>, ServiceError> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    let records: Vec<ProductRecord> = serde_json::from_str(&raw)?;
    Ok(records)
}
