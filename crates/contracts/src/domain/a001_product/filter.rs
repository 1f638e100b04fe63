use super::aggregate::{Category, Product};
use super::catalog::products;
use serde::{Deserialize, Serialize};

/// Catalog filter driven by the Products page: `?category=` plus the search box
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query: String,
}

impl ProductFilter {
    pub fn new(category: Option<String>, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    /// Category slug in effect; `all` when no category is selected
    pub fn category_slug(&self) -> &str {
        match self.category.as_deref() {
            Some(slug) if !slug.is_empty() => slug,
            _ => Category::ALL,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category_slug() == Category::ALL && self.query.trim().is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        let slug = self.category_slug();
        if slug != Category::ALL && product.category_slug != slug {
            return false;
        }
        let query = self.query.to_lowercase();
        query.is_empty() || product.matches_query(&query)
    }

    pub fn apply<'a>(&self, items: &'a [Product]) -> Vec<&'a Product> {
        items.iter().filter(|p| self.matches(p)).collect()
    }

    /// Filter the static catalog
    pub fn apply_catalog(&self) -> Vec<&'static Product> {
        self.apply(products())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&Product]) -> Vec<String> {
        items.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let filter = ProductFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply_catalog().len(), products().len());
    }

    #[test]
    fn test_all_slug_is_no_filter() {
        let filter = ProductFilter::new(Some("all".into()), "");
        assert_eq!(filter.apply_catalog().len(), products().len());
    }

    #[test]
    fn test_category_filter() {
        let filter = ProductFilter::new(Some("plywood".into()), "");
        assert_eq!(
            ids(&filter.apply_catalog()),
            vec!["plywood-marine-1", "plywood-ordinary-1"]
        );
    }

    #[test]
    fn test_query_is_case_insensitive_and_checks_description() {
        let filter = ProductFilter::new(None, "HUMID");
        assert_eq!(ids(&filter.apply_catalog()), vec!["gypsum-board-2"]);
    }

    #[test]
    fn test_query_matches_category_name() {
        let filter = ProductFilter::new(None, "steel deck");
        assert_eq!(
            ids(&filter.apply_catalog()),
            vec!["steel-deck-1", "steel-deck-2"]
        );
    }

    #[test]
    fn test_category_and_query_combine() {
        let filter = ProductFilter::new(Some("roofing".into()), "galvanized");
        assert!(filter.apply_catalog().is_empty());

        let filter = ProductFilter::new(Some("roofing".into()), "ribtype");
        assert_eq!(ids(&filter.apply_catalog()), vec!["roofing-ribtype-1"]);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let filter = ProductFilter::new(Some("bricks".into()), "");
        assert!(filter.apply_catalog().is_empty());
    }
}
