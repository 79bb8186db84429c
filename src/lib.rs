//! Furniture POS Library
//!
//! Inventory and shopping-cart management for a single furniture store
//! selling chairs, beds and bookshelves.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod migrator;
pub mod models;
pub mod repositories;
pub mod services;
pub mod session;

pub use errors::ServiceError;
pub use services::AppServices;

/// Commonly used types
pub mod prelude {
    pub use crate::entities::{ProductType, WarehouseLocation};
    pub use crate::errors::ServiceError;
    pub use crate::models::{CartLineRequest, ProductRecord, ProductSnapshot};
    pub use crate::services::{
        AppServices, CartListing, CartService, CatalogService, ListingService, SeedReport,
        SeedingService,
    };
    pub use crate::session::ShopSession;
}
