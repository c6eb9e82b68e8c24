use serde::{Deserialize, Serialize};

/// One product line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Result of applying a quantity delta to a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    Missing,
    Changed(u32),
    Removed,
}

/// Ordered cart lines, unique by `id`, every quantity at least 1.
///
/// Serializes as a bare JSON array of items, which is the persisted form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from raw lines, dropping zero quantities and merging
    /// repeated ids into the first occurrence.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            match cart.items.iter_mut().find(|it| it.id == item.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let items: Vec<CartItem> = serde_json::from_str(raw)?;
        Ok(Self::from_items(items))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|it| it.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Adds one unit of the product, returning the line's new quantity.
    pub fn add(&mut self, id: &str, name: &str, price: f64, image: &str) -> u32 {
        if let Some(existing) = self.items.iter_mut().find(|it| it.id == id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }
        self.items.push(CartItem {
            id: id.to_string(),
            name: name.to_string(),
            price,
            image: image.to_string(),
            quantity: 1,
        });
        1
    }

    /// Removes every line with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|it| it.id != id);
        self.items.len() != before
    }

    pub fn update_quantity(&mut self, id: &str, delta: i32) -> QuantityUpdate {
        let Some(item) = self.items.iter_mut().find(|it| it.id == id) else {
            return QuantityUpdate::Missing;
        };
        let next = i64::from(item.quantity) + i64::from(delta);
        if next <= 0 {
            self.remove(id);
            return QuantityUpdate::Removed;
        }
        item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        QuantityUpdate::Changed(item.quantity)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all quantities; what the cart badge shows.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|it| u64::from(it.quantity)).sum()
    }

    /// Sum of `price * quantity` over all lines.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, quantity: u32) -> CartItem {
        CartItem {
            id: id.into(),
            name: format!("Item {id}"),
            price,
            image: format!("{id}.jpg"),
            quantity,
        }
    }

    #[test]
    fn add_new_item_starts_at_one() {
        let mut cart = Cart::new();
        let qty = cart.add("A1", "Item", 50.0, "x.jpg");
        assert_eq!(qty, 1);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("A1").unwrap().quantity, 1);
    }

    #[test]
    fn add_existing_item_increments_without_duplicate() {
        let mut cart = Cart::new();
        cart.add("A1", "Item", 50.0, "x.jpg");
        let qty = cart.add("A1", "Item", 50.0, "x.jpg");
        assert_eq!(qty, 2);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), 100.0);
    }

    #[test]
    fn remove_present_and_absent() {
        let mut cart = Cart::from_items(vec![item("A", 10.0, 1), item("B", 5.0, 3)]);
        assert!(cart.remove("A"));
        assert!(cart.get("A").is_none());
        assert!(!cart.remove("missing"));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn update_quantity_paths() {
        let mut cart = Cart::from_items(vec![item("A", 10.0, 1), item("B", 5.0, 3)]);
        assert_eq!(cart.update_quantity("B", 1), QuantityUpdate::Changed(4));
        assert_eq!(cart.update_quantity("A", -1), QuantityUpdate::Removed);
        assert!(cart.get("A").is_none());
        assert_eq!(cart.update_quantity("zzz", 1), QuantityUpdate::Missing);
        assert_eq!(cart.update_quantity("B", -10), QuantityUpdate::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn from_items_normalizes_duplicates_and_zero_quantities() {
        let cart = Cart::from_items(vec![
            item("A", 10.0, 2),
            item("B", 5.0, 0),
            item("A", 10.0, 3),
        ]);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("A").unwrap().quantity, 5);
    }

    #[test]
    fn json_round_trip_keeps_lines() {
        let cart = Cart::from_items(vec![item("A", 12.5, 2), item("B", 40.0, 1)]);
        let raw = cart.to_json().unwrap();
        assert!(raw.starts_with('['));
        let back = Cart::from_json(&raw).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Cart::from_json("{not json").is_err());
        assert!(Cart::from_json(r#"[{"id":"A","quantity":-1}]"#).is_err());
    }
}
