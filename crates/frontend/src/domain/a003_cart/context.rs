use contracts::domain::a001_product::Product;
use contracts::domain::a003_cart::Cart;
use leptos::prelude::*;

/// Session cart shared by every page. Lives in memory only.
#[derive(Clone, Copy)]
pub struct CartContext {
    cart: RwSignal<Cart>,
}

impl CartContext {
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(Cart::new()),
        }
    }

    pub fn add(&self, product_id: &str, quantity: u32) {
        self.cart.update(|c| c.add(product_id, quantity));
    }

    pub fn update_quantity(&self, product_id: &str, delta: i32) {
        self.cart.update(|c| c.update_quantity(product_id, delta));
    }

    pub fn remove(&self, product_id: &str) {
        self.cart.update(|c| c.remove(product_id));
    }

    pub fn clear(&self) {
        self.cart.update(|c| c.clear());
    }

    pub fn total_items(&self) -> u32 {
        self.cart.with(|c| c.total_items())
    }

    pub fn is_empty(&self) -> bool {
        self.cart.with(|c| c.is_empty())
    }

    /// Resolved lines as `(product, quantity)`
    pub fn lines(&self) -> Vec<(&'static Product, u32)> {
        self.cart.with(|c| {
            c.lines()
                .into_iter()
                .map(|line| (line.product, line.item.quantity))
                .collect()
        })
    }

    /// Current cart without subscribing
    pub fn snapshot(&self) -> Cart {
        self.cart.get_untracked()
    }
}

impl Default for CartContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartContext not provided in context")
}
