use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ProductType;

/// Cart line entity
///
/// `product_id` is the primary key of the row in the table selected by
/// `product_type`; the pair replaces one nullable foreign key per variant.
/// At most one line exists per (`cart_id`, `product_type`, `model_no`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cart_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Opaque cart identifier, in practice the shopper's name
    pub cart_id: String,
    pub product_type: ProductType,
    pub model_no: String,
    pub product_id: i32,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
