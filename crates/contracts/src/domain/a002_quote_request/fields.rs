//! Field set of the contact / quote-request form.
//!
//! The form is split across three steps and each step owns a fixed group of
//! fields:
//!
//! | step | fields                              | required       |
//! |------|-------------------------------------|----------------|
//! | 0    | name, email, phone, company         | name, email    |
//! | 1    | subject                             | subject        |
//! | 2    | message (+ read-only summary)       | message        |
//!
//! The step gate only ever looks at the fields of the step being left.

use super::aggregate::QuoteRequestDto;
use crate::domain::a001_product::{find_product, Product};
use crate::domain::a003_cart::Cart;
use serde::{Deserialize, Serialize};

/// Notice shown when the step gate refuses to advance
pub const REQUIRED_FIELDS_NOTICE: &str = "Please fill in all required fields";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Company,
    Subject,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Company,
        FieldName::Subject,
        FieldName::Message,
    ];
}

/// Current values of the form, owned by the hosting page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
}

impl QuoteFields {
    /// Number of field-owning steps
    pub const STEP_COUNT: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill subject and message with a quote request for `product`
    pub fn for_product(product: &Product) -> Self {
        Self {
            subject: format!("Quote Request: {}", product.name),
            message: format!(
                "I would like to request a quote for:\n\nProduct: {}\nCategory: {}\n\nPlease provide pricing and availability information.",
                product.name, product.category
            ),
            ..Self::default()
        }
    }

    /// Pre-fill from a `?product=` reference. Unknown or missing ids give an
    /// empty field set.
    pub fn from_product_ref(product_id: Option<&str>) -> Self {
        product_id
            .and_then(find_product)
            .map(Self::for_product)
            .unwrap_or_default()
    }

    /// Pre-fill with every line of the cart
    pub fn for_cart(cart: &Cart) -> Self {
        if cart.is_empty() {
            return Self::default();
        }
        Self {
            subject: "Quote Request: Cart Items".to_string(),
            message: format!(
                "I would like to request a quote for:\n\n{}\n\nPlease provide pricing and availability information.",
                cart.quote_message()
            ),
            ..Self::default()
        }
    }

    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Company => &self.company,
            FieldName::Subject => &self.subject,
            FieldName::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldName::Name => self.name = value,
            FieldName::Email => self.email = value,
            FieldName::Phone => self.phone = value,
            FieldName::Company => self.company = value,
            FieldName::Subject => self.subject = value,
            FieldName::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fields that must be non-blank before leaving `step`
    pub fn required_fields(step: usize) -> &'static [FieldName] {
        match step {
            0 => &[FieldName::Name, FieldName::Email],
            1 => &[FieldName::Subject],
            2 => &[FieldName::Message],
            _ => &[],
        }
    }

    /// Step gate: every required field of `step` is non-empty after trimming.
    /// Indexes past the last step are vacuously valid.
    pub fn validate_step(&self, step: usize) -> bool {
        Self::required_fields(step)
            .iter()
            .all(|f| !self.get(*f).trim().is_empty())
    }

    pub fn validate_all(&self) -> bool {
        (0..Self::STEP_COUNT).all(|step| self.validate_step(step))
    }

    /// Package the field set for the store
    pub fn to_dto(&self) -> QuoteRequestDto {
        QuoteRequestDto {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: non_empty(&self.phone),
            company: non_empty(&self.company),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> QuoteFields {
        QuoteFields {
            name: "Jane".into(),
            email: "j@x.com".into(),
            phone: String::new(),
            company: String::new(),
            subject: "Bulk roofing order".into(),
            message: "40 sheets of tilespan".into(),
        }
    }

    #[test]
    fn test_step_zero_requires_name_and_email() {
        let mut f = filled();
        assert!(f.validate_step(0));

        for blank in ["", "   ", "\t\n"] {
            f.name = blank.into();
            assert!(!f.validate_step(0), "name {:?} must be rejected", blank);
            f.name = "Jane".into();

            f.email = blank.into();
            assert!(!f.validate_step(0), "email {:?} must be rejected", blank);
            f.email = "j@x.com".into();
        }
    }

    #[test]
    fn test_step_zero_ignores_phone_and_company() {
        let mut f = filled();
        f.phone = "   ".into();
        f.company = String::new();
        assert!(f.validate_step(0));
        f.phone = "0915 099 8094".into();
        f.company = "QJWC".into();
        assert!(f.validate_step(0));
    }

    #[test]
    fn test_steps_only_look_at_their_own_fields() {
        let f = QuoteFields {
            subject: "Quote".into(),
            ..QuoteFields::default()
        };
        assert!(!f.validate_step(0));
        assert!(f.validate_step(1));
        assert!(!f.validate_step(2));
    }

    #[test]
    fn test_out_of_range_step_is_valid() {
        let f = QuoteFields::default();
        assert!(f.validate_step(3));
        assert!(f.validate_step(usize::MAX));
    }

    #[test]
    fn test_prefill_from_product_reference() {
        let f = QuoteFields::from_product_ref(Some("roofing-tilespan-1"));
        assert_eq!(f.subject, "Quote Request: Tilespan Roofing");
        assert!(f.message.contains("Product: Tilespan Roofing"));
        assert!(f.message.contains("Category: Roofing"));
        assert!(f.name.is_empty());
        assert!(f.email.is_empty());
    }

    #[test]
    fn test_prefill_unknown_or_missing_reference_is_empty() {
        assert!(QuoteFields::from_product_ref(Some("no-such-product")).is_empty());
        assert!(QuoteFields::from_product_ref(None).is_empty());
    }

    #[test]
    fn test_prefill_from_cart() {
        let mut cart = Cart::new();
        cart.add("plywood-marine-1", 3);
        let f = QuoteFields::for_cart(&cart);
        assert_eq!(f.subject, "Quote Request: Cart Items");
        assert!(f.message.contains("- Marine Plywood - 3/4\" x 3"));

        assert!(QuoteFields::for_cart(&Cart::new()).is_empty());
    }

    #[test]
    fn test_to_dto_maps_empty_optionals_to_none() {
        let mut f = filled();
        let dto = f.to_dto();
        assert_eq!(dto.phone, None);
        assert_eq!(dto.company, None);
        assert_eq!(dto.name, "Jane");

        f.set(FieldName::Company, "QJWC");
        assert_eq!(f.to_dto().company.as_deref(), Some("QJWC"));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut f = filled();
        f.clear();
        assert!(f.is_empty());
        assert!(!f.validate_all());
    }
}
