use contracts::domain::a001_product::find_product;
use contracts::domain::a002_quote_request::QuoteFields;
use contracts::domain::a003_cart::Cart;
use serde::Deserialize;

/// Query string accepted by `/contact`: `?product=<id>` or `?cart=1`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactQuery {
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub cart: Option<String>,
}

impl ContactQuery {
    /// Parse `location.search`; malformed strings count as empty
    pub fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    fn wants_cart(&self) -> bool {
        matches!(self.cart.as_deref(), Some("1") | Some("true"))
    }

    /// True when the form is pre-filled for a quote rather than a plain message
    pub fn is_quote(&self, cart: &Cart) -> bool {
        self.product.as_deref().and_then(find_product).is_some()
            || (self.wants_cart() && !cart.is_empty())
    }

    /// Initial field set. A product reference wins over the cart.
    pub fn initial_fields(&self, cart: &Cart) -> QuoteFields {
        let from_product = QuoteFields::from_product_ref(self.product.as_deref());
        if !from_product.is_empty() {
            return from_product;
        }
        if self.wants_cart() {
            return QuoteFields::for_cart(cart);
        }
        QuoteFields::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart_with_plywood() -> Cart {
        let mut cart = Cart::new();
        cart.add("plywood-marine-1", 3);
        cart
    }

    #[test]
    fn test_parse() {
        let q = ContactQuery::parse("?product=roofing-tilespan-1");
        assert_eq!(q.product.as_deref(), Some("roofing-tilespan-1"));
        assert_eq!(ContactQuery::parse(""), ContactQuery::default());
    }

    #[test]
    fn test_product_prefill() {
        let q = ContactQuery::parse("?product=roofing-tilespan-1");
        let fields = q.initial_fields(&Cart::new());
        assert_eq!(fields.subject, "Quote Request: Tilespan Roofing");
        assert!(fields.message.contains("Product: Tilespan Roofing"));
        assert!(q.is_quote(&Cart::new()));
    }

    #[test]
    fn test_unknown_product_leaves_fields_empty() {
        let q = ContactQuery::parse("?product=does-not-exist");
        assert!(q.initial_fields(&Cart::new()).is_empty());
        assert!(!q.is_quote(&Cart::new()));
    }

    #[test]
    fn test_cart_prefill_and_precedence() {
        let cart = cart_with_plywood();

        let q = ContactQuery::parse("?cart=1");
        let fields = q.initial_fields(&cart);
        assert_eq!(fields.subject, "Quote Request: Cart Items");
        assert!(fields.message.contains("x 3"));

        let q = ContactQuery::parse("?cart=1&product=steel-deck-1");
        assert!(q.initial_fields(&cart).subject.starts_with("Quote Request: "));
        assert_ne!(q.initial_fields(&cart).subject, "Quote Request: Cart Items");
    }

    #[test]
    fn test_cart_flag_with_empty_cart() {
        let q = ContactQuery::parse("?cart=1");
        assert!(q.initial_fields(&Cart::new()).is_empty());
        assert!(!q.is_quote(&Cart::new()));
    }
}
