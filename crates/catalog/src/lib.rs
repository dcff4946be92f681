//! `sugarrush-catalog` — product domain module.
//!
//! This crate contains business rules for the product catalog, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod filter;
pub mod product;
pub mod seed;

pub use filter::{
    LOW_STOCK_THRESHOLD, ProductFilter, filter_products, inventory_value, low_stock_count,
};
pub use product::{NewProduct, Product, ProductPatch};
pub use seed::{CATEGORIES, initial_catalog};
