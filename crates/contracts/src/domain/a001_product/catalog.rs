//! Static product catalog.
//!
//! The supplier's range is small and changes rarely, so it ships with the
//! binary instead of being served from the backend.

use super::aggregate::{Category, Product, ProductSpecs};
use once_cell::sync::Lazy;

static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(build_products);
static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(build_categories);

/// All catalog products in display order
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

/// Category list, starting with the `all` pseudo-category
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

pub fn find_product(id: &str) -> Option<&'static Product> {
    products().iter().find(|p| p.id == id)
}

pub fn find_category(slug: &str) -> Option<&'static Category> {
    categories().iter().find(|c| c.slug == slug)
}

pub fn featured_products() -> Vec<&'static Product> {
    products().iter().filter(|p| p.featured).collect()
}

/// Up to `limit` other products from the same category
pub fn related_products(product: &Product, limit: usize) -> Vec<&'static Product> {
    products()
        .iter()
        .filter(|p| p.category_slug == product.category_slug && p.id != product.id)
        .take(limit)
        .collect()
}

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    category: &str,
    category_slug: &str,
    description: &str,
    specs: ProductSpecs,
    image: &str,
    featured: bool,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        category_slug: category_slug.to_string(),
        description: description.to_string(),
        specs,
        image: image.to_string(),
        price: None,
        in_stock: true,
        featured,
    }
}

fn build_products() -> Vec<Product> {
    vec![
        // Roofing
        product(
            "roofing-tilespan-1",
            "Tilespan Roofing",
            "Roofing",
            "roofing",
            "Premium tilespan roofing sheets with elegant tile-like appearance. Perfect for residential and commercial buildings.",
            ProductSpecs {
                size: s("0.4mm x 1.0m x 3.0m"),
                thickness: s("0.4mm / 0.5mm / 0.6mm"),
                width: s("1.0m"),
                length: s("3.0m"),
                material: s("Pre-painted Steel"),
                colors: s("Blue / Green / Red / White / Beige / Brown / Gray / Black (Special Color)"),
                ..Default::default()
            },
            "/tilespan1.jpg",
            true,
        ),
        product(
            "roofing-ribtype-1",
            "Ribtype Roofing",
            "Roofing",
            "roofing",
            "Durable ribtype roofing panels ideal for industrial and agricultural structures.",
            ProductSpecs {
                size: s("0.4mm x 1.1m x 3.0m"),
                thickness: s("0.4mm / 0.5mm / 0.6mm"),
                width: s("1.0m"),
                length: s("3.0m"),
                material: s("Galvanized Steel"),
                colors: s("Blue, Green, White"),
                ..Default::default()
            },
            "/rib1.png",
            false,
        ),
        product(
            "roofing-corrugated-1",
            "Corrugated Roofing",
            "Roofing",
            "roofing",
            "Classic corrugated design for reliable weather protection. Easy to install and maintain.",
            ProductSpecs {
                size: s("0.4mm x 0.9m x 2.4m"),
                thickness: s("0.4mm / 0.5mm / 0.6mm"),
                width: s("1.1m"),
                length: s("2.4m"),
                material: s("Pre-painted Steel"),
                ..Default::default()
            },
            "/cor1.jpg",
            false,
        ),
        // Steel Deck
        product(
            "steel-deck-1",
            "Steel Deck Panel - 50mm",
            "Steel Deck",
            "steel-deck",
            "High-strength steel deck panel for floor and roof applications. Provides excellent structural support.",
            ProductSpecs {
                size: s("50mm x 150mm x 6.0m"),
                thickness: s("0.8mm / 1.0mm"),
                width: s("150mm"),
                length: s("6.0m"),
                material: s("Galvanized Steel"),
                grade: s("Grade 60/90"),
                ..Default::default()
            },
            "/steeldeck1.png",
            true,
        ),
        product(
            "steel-deck-2",
            "Steel Deck Panel - 75mm",
            "Steel Deck",
            "steel-deck",
            "Heavy-duty steel deck panel for demanding structural applications.",
            ProductSpecs {
                size: s("75mm x 150mm x 6.0m"),
                thickness: s("1.0mm"),
                width: s("150mm"),
                length: s("6.0m"),
                material: s("Galvanized Steel"),
                grade: s("Grade 60/90"),
                ..Default::default()
            },
            "/steeldeck4.png",
            false,
        ),
        // Ficem Board
        product(
            "ficem-board-1",
            "Ficem Board - 6mm",
            "Ficem Board",
            "ficem-board",
            "Fiber cement board for interior and exterior wall cladding. Water-resistant and durable.",
            ProductSpecs {
                size: s("6mm x 4ft x 8ft"),
                thickness: s("6mm"),
                width: s("4ft"),
                length: s("8ft"),
                material: s("Fiber Cement"),
                ..Default::default()
            },
            "/ficem3.jpg",
            false,
        ),
        product(
            "ficem-board-2",
            "Ficem Board - 9mm",
            "Ficem Board",
            "ficem-board",
            "Thicker fiber cement board for enhanced durability and sound insulation.",
            ProductSpecs {
                size: s("9mm x 4ft x 8ft"),
                thickness: s("9mm"),
                width: s("4ft"),
                length: s("8ft"),
                material: s("Fiber Cement"),
                ..Default::default()
            },
            "/ficem1.jpg",
            false,
        ),
        // Gypsum Board
        product(
            "gypsum-board-1",
            "Regular Gypsum Board - 12.7mm",
            "Gypsum Board",
            "gypsum-board",
            "Standard gypsum board for interior walls and ceilings. Easy to cut and install.",
            ProductSpecs {
                size: s("12.7mm x 4ft x 8ft"),
                thickness: s("12.7mm"),
                width: s("4ft"),
                length: s("8ft"),
                material: s("Gypsum"),
                ..Default::default()
            },
            "/gypsum4.jpg",
            true,
        ),
        product(
            "gypsum-board-2",
            "Moisture-Resistant Gypsum Board",
            "Gypsum Board",
            "gypsum-board",
            "Specially treated gypsum board for bathrooms and humid areas.",
            ProductSpecs {
                size: s("12.7mm x 4ft x 8ft"),
                thickness: s("12.7mm"),
                width: s("4ft"),
                length: s("8ft"),
                material: s("Moisture-Resistant Gypsum"),
                ..Default::default()
            },
            "/gypsum2.jpg",
            false,
        ),
        // C Purlins
        product(
            "c-purlin-1",
            "C Purlin - 2\" x 4\" x 6m",
            "C Purlins",
            "c-purlins",
            "Structural C-shaped steel purlins for roof framing and support structures.",
            ProductSpecs {
                size: s("2\" x 4\" x 6m"),
                thickness: s("1.5mm"),
                length: s("6m"),
                material: s("Galvanized Steel"),
                grade: s("Grade 50"),
                ..Default::default()
            },
            "/cpur2.jpg",
            false,
        ),
        product(
            "c-purlin-2",
            "C Purlin - 2\" x 6\" x 6m",
            "C Purlins",
            "c-purlins",
            "Heavy-duty C purlins for larger span applications.",
            ProductSpecs {
                size: s("2\" x 6\" x 6m"),
                thickness: s("2.0mm"),
                length: s("6m"),
                material: s("Galvanized Steel"),
                grade: s("Grade 50"),
                ..Default::default()
            },
            "/cpur1.jpg",
            false,
        ),
        // Plywood
        product(
            "plywood-marine-1",
            "Marine Plywood - 3/4\"",
            "Plywood",
            "plywood",
            "High-quality marine plywood for moisture-resistant applications. Ideal for cabinets and outdoor use.",
            ProductSpecs {
                size: s("3/4\" x 4ft x 8ft"),
                thickness: s("3/4\""),
                width: s("4ft"),
                length: s("8ft"),
                material: s("Marine Grade Plywood"),
                ..Default::default()
            },
            "/plywood2.jpg",
            true,
        ),
        product(
            "plywood-ordinary-1",
            "Ordinary Plywood - 1/2\"",
            "Plywood",
            "plywood",
            "Standard plywood for general construction and interior applications.",
            ProductSpecs {
                size: s("1/2\" x 4ft x 8ft"),
                thickness: s("1/2\""),
                width: s("4ft"),
                length: s("8ft"),
                material: s("Standard Plywood"),
                ..Default::default()
            },
            "/plywood1.jpg",
            false,
        ),
        // Angle Bar
        product(
            "angle-bar-1",
            "Angle Bar - 2\" x 2\" x 6m",
            "Angle Bar",
            "angle-bar",
            "Steel angle bar for structural support and framing applications.",
            ProductSpecs {
                size: s("2\" x 2\" x 6m"),
                thickness: s("3mm"),
                length: s("6m"),
                material: s("Mild Steel"),
                ..Default::default()
            },
            "/anglebar1.jpg",
            false,
        ),
        product(
            "angle-bar-2",
            "Angle Bar - 1.5\" x 1.5\" x 6m",
            "Angle Bar",
            "angle-bar",
            "Medium-duty angle bar for general construction needs.",
            ProductSpecs {
                size: s("1.5\" x 1.5\" x 6m"),
                thickness: s("3mm"),
                length: s("6m"),
                material: s("Mild Steel"),
                ..Default::default()
            },
            "/anglebar2.jpg",
            false,
        ),
    ]
}

fn build_categories() -> Vec<Category> {
    [
        ("All Products", Category::ALL),
        ("Roofing", "roofing"),
        ("Steel Deck", "steel-deck"),
        ("Ficem Board", "ficem-board"),
        ("Gypsum Board", "gypsum-board"),
        ("C Purlins", "c-purlins"),
        ("Plywood", "plywood"),
        ("Angle Bar", "angle-bar"),
    ]
    .into_iter()
    .map(|(name, slug)| Category {
        name: name.to_string(),
        slug: slug.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_product_ids_are_unique() {
        let ids: HashSet<&str> = products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), products().len());
    }

    #[test]
    fn test_every_product_has_a_known_category() {
        for p in products() {
            let category = find_category(&p.category_slug)
                .unwrap_or_else(|| panic!("unknown category for {}", p.id));
            assert_eq!(category.name, p.category);
        }
    }

    #[test]
    fn test_find_product() {
        let p = find_product("roofing-tilespan-1").unwrap();
        assert_eq!(p.name, "Tilespan Roofing");
        assert_eq!(p.category, "Roofing");
        assert!(find_product("does-not-exist").is_none());
    }

    #[test]
    fn test_related_products_same_category_without_self() {
        let p = find_product("roofing-tilespan-1").unwrap();
        let related = related_products(p, 4);
        assert_eq!(related.len(), 2);
        assert!(related.iter().all(|r| r.category_slug == "roofing"));
        assert!(related.iter().all(|r| r.id != p.id));

        assert_eq!(related_products(p, 1).len(), 1);
    }

    #[test]
    fn test_featured_products() {
        let ids: Vec<&str> = featured_products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["roofing-tilespan-1", "steel-deck-1", "gypsum-board-1", "plywood-marine-1"]
        );
    }
}
