use crate::{
    catalog::default_catalog,
    entities::WarehouseLocation,
    errors::ServiceError,
    models::ProductRecord,
    repositories::product_repository::{find_product, insert_record},
};
use metrics::counter;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use validator::Validate;

/// Outcome of one seeding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Records written to their catalog table
    pub inserted: usize,
    /// Records whose model number was already present
    pub skipped: usize,
}

/// Loads catalog records into the product tables.
#[derive(Clone)]
pub struct SeedingService {
    db: Arc<DatabaseConnection>,
}

impl SeedingService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Inserts every record whose model number is not yet in its variant's
    /// table.
    ///
    /// Records are checked in order. A record with an unknown warehouse
    /// location (or otherwise invalid attributes) fails the whole call and
    /// nothing from the batch is committed. Running the same input twice
    /// leaves the tables unchanged the second time.
    ///
    /// # Returns
    ///
    /// * `Ok(SeedReport)` - How many records were inserted and skipped
    /// * `Err(ServiceError::ValidationError)` - A record failed validation
    /// * `Err(ServiceError::DatabaseError)` - The store rejected a write
    #[instrument(skip(self, records), fields(records = records.len()))]
    pub async fn insert_furniture(
        &self,
        records: &[ProductRecord],
    ) -> Result<SeedReport, ServiceError> {
        let txn = self.db.begin().await?;
        let mut report = SeedReport::default();

        for record in records {
            let base = record.base();
            let location = WarehouseLocation::parse(&base.warehouse_location)?;
            base.validate()?;

            let product_type = record.product_type();
            if find_product(&txn, product_type, &base.model_no)
                .await?
                .is_some()
            {
                debug!(%product_type, model_no = %base.model_no, "Product already present");
                report.skipped += 1;
                continue;
            }

            insert_record(&txn, record, location).await?;
            report.inserted += 1;
        }

        txn.commit().await?;

        counter!("furniture_pos.seed.inserted", report.inserted as u64);
        info!(
            inserted = report.inserted,
            skipped = report.skipped,
            "Catalog seeding committed"
        );
        Ok(report)
    }

    /// Seeds the built-in store catalog.
    pub async fn seed_default_catalog(&self) -> Result<SeedReport, ServiceError> {
        self.insert_furniture(&default_catalog()).await
    }
}
