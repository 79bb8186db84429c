use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::ProductType;

/// One requested addition to a cart.
///
/// `product_type` stays raw text so an unknown variant is reported as a
/// validation error rather than failing to deserialize.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CartLineRequest {
    #[validate(length(min = 1, message = "cart_id must not be empty"))]
    pub cart_id: String,
    pub product_type: String,
    #[validate(length(min = 1, message = "model_no must not be empty"))]
    pub model_no: String,
    #[validate(range(min = 1, message = "quantity must be a positive integer"))]
    pub quantity: i32,
}

impl CartLineRequest {
    pub fn new(
        cart_id: impl Into<String>,
        product_type: impl Into<String>,
        model_no: impl Into<String>,
        quantity: i32,
    ) -> Self {
        Self {
            cart_id: cart_id.into(),
            product_type: product_type.into(),
            model_no: model_no.into(),
            quantity,
        }
    }
}

/// A priced line of a cart listing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListedLine {
    pub name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

/// One entry of a cart listing, in cart order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListingEntry {
    Line(ListedLine),
    /// The line's product no longer resolves; it is left out of the total.
    MissingProduct {
        product_type: ProductType,
        model_no: String,
    },
}
