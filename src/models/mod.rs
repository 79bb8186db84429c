pub mod cart;
pub mod product;

pub use cart::{CartLineRequest, ListedLine, ListingEntry};
pub use product::{
    BedRecord, BookshelfRecord, ChairRecord, ProductBase, ProductRecord, ProductSnapshot,
};
