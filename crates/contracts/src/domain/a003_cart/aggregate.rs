//! Quote cart: an in-memory list of products and quantities.
//!
//! Nothing here is priced or persisted; the cart only collects what the
//! visitor wants a quote for.

use crate::domain::a001_product::{find_product, Product};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub quantity: u32,
}

/// Cart item joined with its catalog product
#[derive(Debug, Clone, Copy)]
pub struct CartLine<'a> {
    pub product: &'static Product,
    pub item: &'a CartItem,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units, merging into an existing line
    pub fn add(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.items.push(CartItem {
                product_id: product_id.to_string(),
                quantity,
            }),
        }
    }

    /// Change a line by `delta`; lines that reach zero are dropped
    pub fn update_quantity(&mut self, product_id: &str, delta: i32) {
        for item in self.items.iter_mut().filter(|i| i.product_id == product_id) {
            let next = i64::from(item.quantity) + i64::from(delta);
            item.quantity = next.clamp(0, i64::from(u32::MAX)) as u32;
        }
        self.items.retain(|i| i.quantity > 0);
    }

    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.items
            .iter()
            .find(|i| i.product_id == product_id)
            .map(|i| i.quantity)
            .unwrap_or(0)
    }

    /// Lines whose product is still in the catalog
    pub fn lines(&self) -> Vec<CartLine<'_>> {
        self.items
            .iter()
            .filter_map(|item| {
                find_product(&item.product_id).map(|product| CartLine { product, item })
            })
            .collect()
    }

    /// Plain-text list used to pre-fill a quote request
    pub fn quote_message(&self) -> String {
        self.lines()
            .iter()
            .map(|line| format!("- {} x {}", line.product.name, line.item.quantity))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_merges_lines() {
        let mut cart = Cart::new();
        cart.add("steel-deck-1", 2);
        cart.add("steel-deck-1", 3);
        cart.add("angle-bar-1", 1);
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.quantity_of("steel-deck-1"), 5);
        assert_eq!(cart.total_items(), 6);
    }

    #[test]
    fn test_add_zero_is_ignored() {
        let mut cart = Cart::new();
        cart.add("steel-deck-1", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_drops_lines_at_zero() {
        let mut cart = Cart::new();
        cart.add("steel-deck-1", 1);
        cart.add("angle-bar-1", 2);

        cart.update_quantity("angle-bar-1", 1);
        assert_eq!(cart.quantity_of("angle-bar-1"), 3);

        cart.update_quantity("steel-deck-1", -1);
        assert_eq!(cart.quantity_of("steel-deck-1"), 0);
        assert_eq!(cart.items.len(), 1);

        cart.update_quantity("angle-bar-1", -10);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add("steel-deck-1", 1);
        cart.add("angle-bar-1", 1);
        cart.remove("steel-deck-1");
        assert_eq!(cart.items.len(), 1);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_lines_skip_unknown_products() {
        let mut cart = Cart::new();
        cart.add("discontinued-item", 4);
        cart.add("ficem-board-1", 2);
        let lines = cart.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product.id, "ficem-board-1");
        assert_eq!(cart.quote_message(), "- Ficem Board - 6mm x 2");
    }
}
