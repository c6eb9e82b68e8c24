use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A product as listed on the storefront page.
///
/// `id`, `name`, `price` and `image` are what an "add to cart" control carries;
/// `name` and `category` are what the search filter matches against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    #[serde(default)]
    pub category: String,
}

impl ProductCard {
    pub fn new(id: &str, name: &str, price: f64, category: &str, image: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            category: category.into(),
        }
    }
}

/// Parses and validates a JSON catalog (an array of product cards).
pub fn catalog_from_json(raw: &str) -> anyhow::Result<Vec<ProductCard>> {
    let cards: Vec<ProductCard> = serde_json::from_str(raw)?;
    let mut seen = HashSet::new();
    for card in &cards {
        if card.id.trim().is_empty() {
            anyhow::bail!("product id empty");
        }
        if !card.price.is_finite() || card.price < 0.0 {
            anyhow::bail!("product {} has invalid price", card.id);
        }
        if !seen.insert(card.id.as_str()) {
            anyhow::bail!("duplicate product id {}", card.id);
        }
    }
    Ok(cards)
}

/// Catalog used when no catalog file is configured.
pub fn seed_catalog() -> Vec<ProductCard> {
    vec![
        ProductCard::new(
            "1",
            "Fresh Apples",
            120.0,
            "Fruits",
            "https://images.unsplash.com/photo-1560806887-1e4cd0b6cbd6?auto=format&fit=crop&w=500&q=60",
        ),
        ProductCard::new(
            "2",
            "Organic Bananas",
            40.0,
            "Fruits",
            "https://images.unsplash.com/photo-1571771896612-618da8fd8b00?auto=format&fit=crop&w=500&q=60",
        ),
        ProductCard::new(
            "3",
            "Whole Wheat Bread",
            35.0,
            "Bakery",
            "https://images.unsplash.com/photo-1509440159596-0249088772ff?auto=format&fit=crop&w=500&q=60",
        ),
        ProductCard::new(
            "4",
            "Farm Fresh Milk",
            55.0,
            "Dairy",
            "https://images.unsplash.com/photo-1563636619-e9143da7973b?auto=format&fit=crop&w=500&q=60",
        ),
        ProductCard::new(
            "5",
            "Basmati Rice (1kg)",
            180.0,
            "Grains",
            "https://images.unsplash.com/photo-1586201375761-83865001e31c?auto=format&fit=crop&w=500&q=60",
        ),
        ProductCard::new(
            "6",
            "Premium Chocolate",
            250.0,
            "Snacks",
            "https://images.unsplash.com/photo-1542843137-8791a69ea4d4?auto=format&fit=crop&w=500&q=60",
        ),
    ]
}
