use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::cart_item::{self, ActiveModel as CartItemActiveModel, Column};
use crate::entities::{CartItem, CartItemModel, ProductType};
use crate::errors::ServiceError;
use crate::models::ProductSnapshot;

/// The line for (cart, variant, model), if the cart already holds it.
pub async fn find_line<C: ConnectionTrait>(
    conn: &C,
    cart_id: &str,
    product_type: ProductType,
    model_no: &str,
) -> Result<Option<CartItemModel>, ServiceError> {
    let line = CartItem::find()
        .filter(Column::CartId.eq(cart_id))
        .filter(Column::ProductType.eq(product_type))
        .filter(Column::ModelNo.eq(model_no))
        .one(conn)
        .await?;
    Ok(line)
}

/// Every line of a cart in the order it was first added.
pub async fn lines_for_cart<C: ConnectionTrait>(
    conn: &C,
    cart_id: &str,
) -> Result<Vec<CartItemModel>, ServiceError> {
    let lines = CartItem::find()
        .filter(Column::CartId.eq(cart_id))
        .order_by_asc(Column::Id)
        .all(conn)
        .await?;
    Ok(lines)
}

pub async fn create_line<C: ConnectionTrait>(
    conn: &C,
    cart_id: &str,
    product: &ProductSnapshot,
    quantity: i32,
) -> Result<CartItemModel, ServiceError> {
    let now = Utc::now();
    let line = CartItemActiveModel {
        cart_id: Set(cart_id.to_string()),
        product_type: Set(product.product_type),
        model_no: Set(product.model_no.clone()),
        product_id: Set(product.id),
        quantity: Set(quantity),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(conn)
    .await?;
    Ok(line)
}

pub async fn increment_line<C: ConnectionTrait>(
    conn: &C,
    line: CartItemModel,
    quantity: i32,
) -> Result<CartItemModel, ServiceError> {
    let merged = line.quantity.checked_add(quantity).ok_or_else(|| {
        ServiceError::ValidationError(format!(
            "Quantity for {} {} in cart {} would exceed {}",
            line.product_type,
            line.model_no,
            line.cart_id,
            i32::MAX
        ))
    })?;
    let mut line: cart_item::ActiveModel = line.into();
    line.quantity = Set(merged);
    line.updated_at = Set(Utc::now());
    Ok(line.update(conn).await?)
}
