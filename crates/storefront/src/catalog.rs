//! Static product catalog.
//!
//! The catalog is read-only reference data defined at startup; products are
//! never mutated. Cart lines, favourites, and order items all resolve their
//! product ids against it.

use rust_decimal::dec;

use ethereal_eve_core::{Price, ProductId};

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub price: Price,
    /// Star rating, 0-5.
    pub rating: u8,
    /// Path to the product image under `/static`.
    pub img: String,
}

/// The static product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build the Ethereal Eve catalog.
    #[must_use]
    pub fn ethereal_eve() -> Self {
        let products = vec![
            product(
                "p1",
                "Velvet Dusk Eau de Parfum",
                "Fragrance",
                Price::new(dec!(200)),
                5,
                "/static/images/products/velvet-dusk.jpg",
            ),
            product(
                "p2",
                "Moonlit Rose Body Oil",
                "Bath & Body",
                Price::new(dec!(310)),
                4,
                "/static/images/products/moonlit-rose.jpg",
            ),
            product(
                "p3",
                "Celestial Glow Face Serum",
                "Skincare",
                Price::new(dec!(450)),
                5,
                "/static/images/products/celestial-glow.jpg",
            ),
            product(
                "p4",
                "Midnight Bloom Hand Cream",
                "Skincare",
                Price::new(dec!(145)),
                4,
                "/static/images/products/midnight-bloom.jpg",
            ),
            product(
                "p5",
                "Ethereal Mist Setting Spray",
                "Skincare",
                Price::new(dec!(265)),
                4,
                "/static/images/products/ethereal-mist.jpg",
            ),
            product(
                "p6",
                "Opaline Shimmer Bath Salts",
                "Bath & Body",
                Price::new(dec!(180)),
                5,
                "/static/images/products/opaline-shimmer.jpg",
            ),
            product(
                "p7",
                "Twilight Amber Candle",
                "Home",
                Price::new(dec!(220)),
                5,
                "/static/images/products/twilight-amber.jpg",
            ),
            product(
                "p8",
                "Silk Halo Hair Scrunchie Set",
                "Accessories",
                Price::new(dec!(95)),
                3,
                "/static/images/products/silk-halo.jpg",
            ),
        ];

        Self { products }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products in the given category, in catalog order.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Distinct category names, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for p in &self.products {
            if !categories.contains(&p.category.as_str()) {
                categories.push(&p.category);
            }
        }
        categories
    }
}

fn product(
    id: &str,
    title: &str,
    category: &str,
    price: Price,
    rating: u8,
    img: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_owned(),
        category: category.to_owned(),
        price,
        rating,
        img: img.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::ethereal_eve();
        let found = catalog.get(&ProductId::new("p1")).expect("p1 exists");
        assert_eq!(found.title, "Velvet Dusk Eau de Parfum");
        assert!(catalog.get(&ProductId::new("nope")).is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::ethereal_eve();
        for p in catalog.products() {
            let matching = catalog.products().iter().filter(|q| q.id == p.id).count();
            assert_eq!(matching, 1, "duplicate catalog id {}", p.id);
        }
    }

    #[test]
    fn test_categories_are_distinct() {
        let catalog = Catalog::ethereal_eve();
        let categories = catalog.categories();
        assert!(categories.contains(&"Fragrance"));

        let mut seen = std::collections::HashSet::new();
        for c in &categories {
            assert!(seen.insert(*c), "duplicate category {c}");
        }
    }

    #[test]
    fn test_ratings_within_range() {
        let catalog = Catalog::ethereal_eve();
        assert!(catalog.products().iter().all(|p| p.rating <= 5));
    }
}
