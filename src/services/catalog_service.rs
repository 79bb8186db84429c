use crate::{
    entities::ProductType, errors::ServiceError, models::ProductSnapshot,
    repositories::product_repository::{find_product, list_products},
};
use sea_orm::DatabaseConnection;
use std::fmt;
use std::sync::Arc;
use tracing::instrument;

/// Read-only browsing of the product catalogs.
#[derive(Clone)]
pub struct CatalogService {
    db: Arc<DatabaseConnection>,
}

impl CatalogService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Every product of one variant, ordered by model number.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        product_type: ProductType,
    ) -> Result<CatalogPage, ServiceError> {
        let products = list_products(&*self.db, product_type).await?;
        Ok(CatalogPage {
            product_type,
            products,
        })
    }

    /// One product by variant and model number.
    #[instrument(skip(self))]
    pub async fn find_product(
        &self,
        product_type: ProductType,
        model_no: &str,
    ) -> Result<Option<ProductSnapshot>, ServiceError> {
        find_product(&*self.db, product_type, model_no).await
    }
}

/// The products of one variant as shown to a shopper.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CatalogPage {
    pub product_type: ProductType,
    pub products: Vec<ProductSnapshot>,
}

impl CatalogPage {
    pub fn get(&self, model_no: &str) -> Option<&ProductSnapshot> {
        self.products.iter().find(|p| p.model_no == model_no)
    }
}

impl fmt::Display for CatalogPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Available {}:", self.product_type.plural())?;
        for product in &self.products {
            writeln!(f, "{}", product)?;
        }
        Ok(())
    }
}
