//! Products module: the product record and its unit price.
//!
//! Pure data types (no IO, no parsing of whole files, no formatting of tables).

pub mod price;
pub mod product;

pub use price::{Price, PriceError};
pub use product::Product;
