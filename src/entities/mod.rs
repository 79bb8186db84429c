pub mod bed;
pub mod bookshelf;
pub mod cart_item;
pub mod chair;
pub mod sea_orm_active_enums;

// Re-export entities
pub use bed::{Entity as Bed, Model as BedModel};
pub use bookshelf::{Entity as Bookshelf, Model as BookshelfModel};
pub use cart_item::{Entity as CartItem, Model as CartItemModel};
pub use chair::{Entity as Chair, Model as ChairModel};
pub use sea_orm_active_enums::{ProductType, WarehouseLocation};
