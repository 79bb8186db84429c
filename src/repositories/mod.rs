pub mod cart_item_repository;
pub mod product_repository;
