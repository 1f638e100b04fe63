pub mod aggregate;
pub mod catalog;
pub mod filter;

pub use aggregate::{Category, Product, ProductSpecs};
pub use catalog::{categories, featured_products, find_category, find_product, products, related_products};
pub use filter::ProductFilter;
