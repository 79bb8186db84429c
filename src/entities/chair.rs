use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::WarehouseLocation;

/// Chair catalog entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "chairs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category: String,
    pub warehouse_location: WarehouseLocation,
    #[sea_orm(unique)]
    pub model_no: String,
    pub stock_level: i32,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub price: Decimal,
    pub material: String,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub has_armrests: bool,
    pub max_weight: f64,
    pub has_sitting_pad: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
