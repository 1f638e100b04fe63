use serde::{Deserialize, Serialize};

// ============================================================================
// Specs
// ============================================================================

/// Technical specification of a product. Every field is optional; only the
/// ones that are present are shown on the detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSpecs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<String>,
}

impl ProductSpecs {
    /// Present specs as `(label, value)` rows in declaration order
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        [
            ("Size", &self.size),
            ("Thickness", &self.thickness),
            ("Width", &self.width),
            ("Length", &self.length),
            ("Material", &self.material),
            ("Grade", &self.grade),
            ("Weight", &self.weight),
            ("Colors", &self.colors),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Catalog product. The id is a human readable slug (`roofing-tilespan-1`)
/// and is what travels in `?product=` links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(rename = "categorySlug")]
    pub category_slug: String,
    pub description: String,
    pub specs: ProductSpecs,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Case-insensitive substring match against name, description and
    /// category. `query` must already be lowercased.
    pub fn matches_query(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
            || self.category.to_lowercase().contains(query)
    }

    pub fn detail_href(&self) -> String {
        format!("/products/{}", self.id)
    }

    pub fn quote_href(&self) -> String {
        format!("/contact?product={}", self.id)
    }
}

/// Catalog category. The slug `all` is the pseudo-category meaning "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
}

impl Category {
    pub const ALL: &'static str = "all";

    pub fn is_all(&self) -> bool {
        self.slug == Self::ALL
    }

    pub fn href(&self) -> String {
        if self.is_all() {
            "/products".to_string()
        } else {
            format!("/products?category={}", self.slug)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_rows_skip_missing_fields() {
        let specs = ProductSpecs {
            size: Some("6mm x 4ft x 8ft".into()),
            material: Some("Fiber Cement".into()),
            ..Default::default()
        };
        assert_eq!(
            specs.rows(),
            vec![("Size", "6mm x 4ft x 8ft"), ("Material", "Fiber Cement")]
        );
    }

    #[test]
    fn test_category_href() {
        let all = Category { name: "All Products".into(), slug: "all".into() };
        let roofing = Category { name: "Roofing".into(), slug: "roofing".into() };
        assert_eq!(all.href(), "/products");
        assert_eq!(roofing.href(), "/products?category=roofing");
    }
}
