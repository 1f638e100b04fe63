pub mod a001_product;
pub mod a002_quote_request;
pub mod a003_cart;
pub mod common;
