use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Warehouse a product ships from.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum WarehouseLocation {
    #[sea_orm(string_value = "FanLing")]
    FanLing,
    #[sea_orm(string_value = "Mongkok")]
    Mongkok,
}

/// The product variant a catalog row or cart line belongs to.
///
/// Each variant owns its own table; cart lines carry this tag next to the
/// product key so the row can be resolved through the product repository.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ProductType {
    #[sea_orm(string_value = "Chair")]
    Chair,
    #[sea_orm(string_value = "Bed")]
    Bed,
    #[sea_orm(string_value = "Bookshelf")]
    Bookshelf,
}

impl ProductType {
    /// Parses a user-supplied variant name, e.g. from a cart request.
    pub fn parse(value: &str) -> Result<Self, crate::errors::ServiceError> {
        value.parse().map_err(|_| {
            crate::errors::ServiceError::ValidationError(format!(
                "Invalid product_type: {}. Must be one of Chair, Bed, Bookshelf",
                value
            ))
        })
    }

    /// Plural heading used when listing a catalog ("Chairs", "Beds", ...).
    pub fn plural(&self) -> String {
        format!("{}s", self)
    }
}

impl WarehouseLocation {
    /// Parses a raw location, e.g. from a catalog file.
    pub fn parse(value: &str) -> Result<Self, crate::errors::ServiceError> {
        value.parse().map_err(|_| {
            crate::errors::ServiceError::ValidationError(format!(
                "Invalid warehouse_location: {}. Must be one of FanLing, Mongkok",
                value
            ))
        })
    }
}
