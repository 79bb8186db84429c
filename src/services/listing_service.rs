use crate::{
    errors::ServiceError,
    models::{ListedLine, ListingEntry},
    repositories::{cart_item_repository::lines_for_cart, product_repository::find_product},
};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{instrument, warn};

const RULE_WIDTH: usize = 40;

/// A priced view of one cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CartListing {
    /// The cart has no lines.
    Empty { cart_id: String },
    Populated {
        cart_id: String,
        entries: Vec<ListingEntry>,
        /// Sum of the line totals of products that still resolve
        grand_total: Decimal,
    },
}

impl CartListing {
    pub fn cart_id(&self) -> &str {
        match self {
            Self::Empty { cart_id } | Self::Populated { cart_id, .. } => cart_id,
        }
    }

    pub fn grand_total(&self) -> Decimal {
        match self {
            Self::Empty { .. } => Decimal::ZERO,
            Self::Populated { grand_total, .. } => *grand_total,
        }
    }

    /// Priced lines, skipping products that no longer resolve.
    pub fn lines(&self) -> impl Iterator<Item = &ListedLine> {
        let entries: &[ListingEntry] = match self {
            Self::Empty { .. } => &[],
            Self::Populated { entries, .. } => entries,
        };
        entries.iter().filter_map(|entry| match entry {
            ListingEntry::Line(line) => Some(line),
            ListingEntry::MissingProduct { .. } => None,
        })
    }
}

fn money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

impl fmt::Display for CartListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (cart_id, entries, grand_total) = match self {
            Self::Empty { cart_id } => {
                return writeln!(f, "No items found in cart for {}", cart_id);
            }
            Self::Populated {
                cart_id,
                entries,
                grand_total,
            } => (cart_id, entries, grand_total),
        };
        let rule = "-".repeat(RULE_WIDTH);

        writeln!(f)?;
        writeln!(f, "Shopping Cart Contents for {}:", cart_id)?;
        writeln!(f, "{}", rule)?;
        writeln!(
            f,
            "{:<20} {:<10} {:<12} {:<12}",
            "Item", "Quantity", "Unit Price", "Total Price"
        )?;
        writeln!(f, "{}", rule)?;
        for entry in entries {
            match entry {
                ListingEntry::Line(line) => writeln!(
                    f,
                    "{:<20} {:<10} ${:<11} ${:<11}",
                    line.name,
                    line.quantity,
                    money(line.unit_price),
                    money(line.line_total)
                )?,
                ListingEntry::MissingProduct {
                    product_type,
                    model_no,
                } => writeln!(f, "Warning: Product {} {} not found", product_type, model_no)?,
            }
        }
        writeln!(f, "{}", rule)?;
        writeln!(f, "{:<20} {:<10} {:<12} ${}", "Total", "", "", money(*grand_total))?;
        writeln!(f, "{}", rule)
    }
}

/// Prices cart contents against the current catalog.
#[derive(Clone)]
pub struct ListingService {
    db: Arc<DatabaseConnection>,
}

impl ListingService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Lists a cart with per-line and grand totals.
    ///
    /// Unit prices are read at listing time, not when the line was added.
    /// A line whose product has disappeared becomes a
    /// [`ListingEntry::MissingProduct`] and is left out of the total; an
    /// empty cart is [`CartListing::Empty`]. Neither is an error.
    #[instrument(skip(self))]
    pub async fn list_cart_contents(&self, cart_id: &str) -> Result<CartListing, ServiceError> {
        let txn = self.db.begin().await?;
        let lines = lines_for_cart(&txn, cart_id).await?;

        if lines.is_empty() {
            txn.commit().await?;
            return Ok(CartListing::Empty {
                cart_id: cart_id.to_string(),
            });
        }

        let mut entries = Vec::with_capacity(lines.len());
        let mut grand_total = Decimal::ZERO;
        for line in lines {
            match find_product(&txn, line.product_type, &line.model_no).await? {
                Some(product) => {
                    let line_total = product
                        .price
                        .checked_mul(Decimal::from(line.quantity))
                        .ok_or_else(|| {
                            ServiceError::InternalError(format!(
                                "Line total for {} overflowed",
                                line.model_no
                            ))
                        })?;
                    grand_total = grand_total.checked_add(line_total).ok_or_else(|| {
                        ServiceError::InternalError(format!(
                            "Grand total for cart {} overflowed",
                            cart_id
                        ))
                    })?;
                    entries.push(ListingEntry::Line(ListedLine {
                        name: product.display_name(),
                        quantity: line.quantity,
                        unit_price: product.price,
                        line_total,
                    }));
                }
                None => {
                    warn!(
                        product_type = %line.product_type,
                        model_no = %line.model_no,
                        "Cart line references a missing product"
                    );
                    entries.push(ListingEntry::MissingProduct {
                        product_type: line.product_type,
                        model_no: line.model_no,
                    });
                }
            }
        }
        txn.commit().await?;

        Ok(CartListing::Populated {
            cart_id: cart_id.to_string(),
            entries,
            grand_total,
        })
    }
}
