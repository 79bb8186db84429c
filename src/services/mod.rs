pub mod cart_service;
pub mod catalog_service;
pub mod listing_service;
pub mod seeding_service;

use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub use cart_service::CartService;
pub use catalog_service::CatalogService;
pub use listing_service::{CartListing, ListingService};
pub use seeding_service::{SeedReport, SeedingService};

/// Every service of the shop, sharing one store handle.
#[derive(Clone)]
pub struct AppServices {
    pub seeding: SeedingService,
    pub carts: CartService,
    pub listing: ListingService,
    pub catalog: CatalogService,
}

impl AppServices {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            seeding: SeedingService::new(db.clone()),
            carts: CartService::new(db.clone()),
            listing: ListingService::new(db.clone()),
            catalog: CatalogService::new(db),
        }
    }
}
