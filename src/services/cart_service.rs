use crate::{
    entities::{CartItemModel, ProductType},
    errors::ServiceError,
    models::CartLineRequest,
    repositories::{
        cart_item_repository::{create_line, find_line, increment_line},
        product_repository::find_product,
    },
};
use metrics::counter;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

/// Shopping cart service.
///
/// Merges requested additions into per-shopper carts after checking them
/// against the live catalog. Stock levels are read, never reserved or
/// decremented.
#[derive(Clone)]
pub struct CartService {
    db: Arc<DatabaseConnection>,
}

impl CartService {
    /// Creates a new `CartService` instance.
    ///
    /// # Arguments
    ///
    /// * `db` - Database connection pool
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Adds a batch of requested lines to their carts.
    ///
    /// Each request is checked in order:
    /// - the product type must be Chair, Bed or Bookshelf and the quantity positive
    /// - the model must exist for that type
    /// - the quantity must not exceed the product's current stock
    ///
    /// A cart already holding the product has its line's quantity increased;
    /// otherwise a new line is created. All changes commit together, so one
    /// rejected request leaves every cart as it was.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<CartItemModel>)` - The resulting line for each request, in request order
    /// * `Err(ServiceError::ValidationError)` - Unknown product type or malformed request
    /// * `Err(ServiceError::NotFound)` - Unknown model for the product type
    /// * `Err(ServiceError::InsufficientStock)` - Quantity exceeds available stock
    #[instrument(skip(self, requests), fields(requests = requests.len()))]
    pub async fn insert_cart_items(
        &self,
        requests: &[CartLineRequest],
    ) -> Result<Vec<CartItemModel>, ServiceError> {
        let txn = self.db.begin().await?;
        let mut lines = Vec::with_capacity(requests.len());

        for request in requests {
            match Self::apply_request(&txn, request).await {
                Ok(line) => lines.push(line),
                Err(err) => {
                    counter!("furniture_pos.cart.rejected", 1, "kind" => err.kind());
                    warn!(
                        cart_id = %request.cart_id,
                        product_type = %request.product_type,
                        model_no = %request.model_no,
                        quantity = request.quantity,
                        error = %err,
                        "Cart request rejected"
                    );
                    return Err(err);
                }
            }
        }

        txn.commit().await?;

        counter!("furniture_pos.cart.lines_added", lines.len() as u64);
        info!(lines = lines.len(), "Cart changes committed");
        Ok(lines)
    }

    /// Adds one product to a cart.
    ///
    /// Shorthand for a single-request [`insert_cart_items`](Self::insert_cart_items).
    pub async fn add_item(
        &self,
        cart_id: &str,
        product_type: ProductType,
        model_no: &str,
        quantity: i32,
    ) -> Result<CartItemModel, ServiceError> {
        let request = CartLineRequest::new(cart_id, product_type.to_string(), model_no, quantity);
        self.insert_cart_items(std::slice::from_ref(&request))
            .await?
            .pop()
            .ok_or_else(|| ServiceError::InternalError("cart insert returned no line".into()))
    }

    async fn apply_request(
        txn: &DatabaseTransaction,
        request: &CartLineRequest,
    ) -> Result<CartItemModel, ServiceError> {
        let product_type = ProductType::parse(&request.product_type)?;
        request.validate()?;

        let product = find_product(txn, product_type, &request.model_no)
            .await?
            .ok_or_else(|| ServiceError::product_not_found(product_type, &request.model_no))?;

        if request.quantity > product.stock_level {
            return Err(ServiceError::InsufficientStock {
                product_type,
                model_no: product.model_no,
                available: product.stock_level,
                requested: request.quantity,
            });
        }

        match find_line(txn, &request.cart_id, product_type, &product.model_no).await? {
            Some(line) => increment_line(txn, line, request.quantity).await,
            None => create_line(txn, &request.cart_id, &product, request.quantity).await,
        }
    }
}
