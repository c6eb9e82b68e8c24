use std::path::Path;

use anyhow::Context;
use cart_types::domain::product::{catalog_from_json, seed_catalog, ProductCard};

/// Products listed on the storefront: the JSON file at `path`, or the seed
/// catalog when none is configured.
pub fn load(path: Option<&Path>) -> anyhow::Result<Vec<ProductCard>> {
    let Some(path) = path else {
        return Ok(seed_catalog());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    catalog_from_json(&raw).with_context(|| format!("invalid catalog {}", path.display()))
}

pub fn find<'a>(catalog: &'a [ProductCard], id: &str) -> Option<&'a ProductCard> {
    catalog.iter().find(|c| c.id == id)
}
