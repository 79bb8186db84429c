#![allow(dead_code)]

use std::sync::Arc;

use furniture_pos::{
    db::{self, DbConfig},
    entities::{Bed, Bookshelf, CartItem, Chair},
    services::{AppServices, SeedReport},
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

/// Helper harness backed by a fresh in-memory SQLite database.
pub struct TestApp {
    pub db: Arc<DatabaseConnection>,
    pub services: AppServices,
}

/// Row counts of every table, for before/after comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCounts {
    pub chairs: u64,
    pub beds: u64,
    pub bookshelves: u64,
    pub cart_items: u64,
}

impl TestApp {
    /// Construct a new test application with migrated, empty tables.
    pub async fn new() -> Self {
        let pool = db::establish_connection_with_config(&DbConfig::in_memory())
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations");

        let db = Arc::new(pool);
        let services = AppServices::new(db.clone());
        Self { db, services }
    }

    /// Construct a test application holding the built-in catalog.
    pub async fn seeded() -> Self {
        let app = Self::new().await;
        let report = app.seed().await;
        assert_eq!(report.inserted, 15);
        app
    }

    pub async fn seed(&self) -> SeedReport {
        self.services
            .seeding
            .seed_default_catalog()
            .await
            .expect("failed to seed catalog")
    }

    pub async fn counts(&self) -> TableCounts {
        TableCounts {
            chairs: Chair::find().count(&*self.db).await.unwrap(),
            beds: Bed::find().count(&*self.db).await.unwrap(),
            bookshelves: Bookshelf::find().count(&*self.db).await.unwrap(),
            cart_items: CartItem::find().count(&*self.db).await.unwrap(),
        }
    }
}
