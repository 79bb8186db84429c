use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

use crate::entities::{ProductType, WarehouseLocation};

/// Attributes every furniture variant carries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductBase {
    #[validate(length(min = 1))]
    pub category: String,
    /// Raw location text; the seeding service checks it against
    /// [`WarehouseLocation`] before anything is written.
    pub warehouse_location: String,
    #[validate(length(min = 1))]
    pub model_no: String,
    #[validate(range(min = 0))]
    pub stock_level: i32,
    #[validate(custom = "validate_price")]
    pub price: Decimal,
    pub material: String,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// Largest price a `DECIMAL(16, 4)` price column holds.
pub const MAX_PRICE: Decimal = rust_decimal_macros::dec!(999_999_999_999.9999);

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        return Err(ValidationError::new("negative_price"));
    }
    if *price > MAX_PRICE {
        return Err(ValidationError::new("price_out_of_range"));
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChairRecord {
    #[serde(flatten)]
    pub base: ProductBase,
    pub has_armrests: bool,
    pub max_weight: f64,
    pub has_sitting_pad: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BedRecord {
    #[serde(flatten)]
    pub base: ProductBase,
    /// Size class, e.g. "Single", "Double", "Queen"
    pub bed_size: String,
    pub has_headboard: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookshelfRecord {
    #[serde(flatten)]
    pub base: ProductBase,
    pub shelf_layers: i32,
    pub maximum_weight: f64,
}

/// A catalog entry waiting to be written to its variant's table.
///
/// Serialized with a `product_type` tag so catalog files read like
/// `{"product_type": "Chair", "model_no": "CH-001", ...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "product_type")]
pub enum ProductRecord {
    Chair(ChairRecord),
    Bed(BedRecord),
    Bookshelf(BookshelfRecord),
}

impl ProductRecord {
    pub fn product_type(&self) -> ProductType {
        match self {
            Self::Chair(_) => ProductType::Chair,
            Self::Bed(_) => ProductType::Bed,
            Self::Bookshelf(_) => ProductType::Bookshelf,
        }
    }

    pub fn base(&self) -> &ProductBase {
        match self {
            Self::Chair(record) => &record.base,
            Self::Bed(record) => &record.base,
            Self::Bookshelf(record) => &record.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut ProductBase {
        match self {
            Self::Chair(record) => &mut record.base,
            Self::Bed(record) => &mut record.base,
            Self::Bookshelf(record) => &mut record.base,
        }
    }

    pub fn model_no(&self) -> &str {
        &self.base().model_no
    }
}

/// Uniform read view over a row of any catalog table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub product_type: ProductType,
    /// Primary key within the variant's table.
    pub id: i32,
    pub model_no: String,
    pub category: String,
    pub warehouse_location: WarehouseLocation,
    pub stock_level: i32,
    pub price: Decimal,
}

impl ProductSnapshot {
    /// Display name used on cart listings, e.g. `Chair CH-001`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.product_type, self.model_no)
    }
}

impl fmt::Display for ProductSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Model: {}, Category: {}, Price: ${:.2}, Stock: {}",
            self.model_no, self.category, self.price, self.stock_level
        )
    }
}
