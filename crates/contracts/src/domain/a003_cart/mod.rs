pub mod aggregate;

pub use aggregate::{Cart, CartItem, CartLine};
