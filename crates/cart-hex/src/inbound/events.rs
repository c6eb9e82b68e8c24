//! Delegated click handling.
//!
//! A click is described by the element path from the clicked target up to the
//! body. The closest element that means something to the cart decides the
//! action, the same way a single listener on the body would resolve it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const ADD_TO_CART_CLASS: &str = "btn-add-cart";
pub const PLACE_ORDER_CLASS: &str = "btn-place-order";
pub const NAV_TOGGLE_ID: &str = "hamburger";
/// `data-cart-action` on the controls of a rendered summary row.
pub const ROW_ACTION_ATTR: &str = "cart-action";

/// An element on the click path: its id, classes and `data-*` attributes
/// (keys without the `data-` prefix).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.data.insert(key.to_string(), value.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// An "add to cart" control for a product.
    pub fn add_to_cart_button(id: &str, name: &str, price: &str, image: &str) -> Self {
        Self::new()
            .with_class(ADD_TO_CART_CLASS)
            .with_data("id", id)
            .with_data("name", name)
            .with_data("price", price)
            .with_data("image", image)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    AddItem {
        id: String,
        name: String,
        price: f64,
        image: String,
    },
    UpdateQuantity {
        id: String,
        delta: i32,
    },
    Remove {
        id: String,
    },
    PlaceOrder,
    ToggleNav,
}

/// Resolves a click to a cart action. `path[0]` is the clicked element.
pub fn dispatch_click(path: &[Element]) -> Option<CartAction> {
    for el in path {
        if el.has_class(ADD_TO_CART_CLASS) {
            return add_item_from(el);
        }
        if let Some(action) = el.data(ROW_ACTION_ATTR) {
            return row_action_from(el, action);
        }
        if el.has_class(PLACE_ORDER_CLASS) {
            return Some(CartAction::PlaceOrder);
        }
        if el.id.as_deref() == Some(NAV_TOGGLE_ID) {
            return Some(CartAction::ToggleNav);
        }
    }
    None
}

fn add_item_from(el: &Element) -> Option<CartAction> {
    let (Some(id), Some(name), Some(raw_price), Some(image)) = (
        el.data("id"),
        el.data("name"),
        el.data("price"),
        el.data("image"),
    ) else {
        tracing::warn!(?el, "add-to-cart control is missing data attributes");
        return None;
    };
    let price = match raw_price.trim().parse::<f64>() {
        Ok(p) if p.is_finite() => p,
        _ => {
            tracing::warn!(id, raw_price, "add-to-cart control has an unparsable price");
            return None;
        }
    };
    Some(CartAction::AddItem {
        id: id.to_string(),
        name: name.to_string(),
        price,
        image: image.to_string(),
    })
}

fn row_action_from(el: &Element, action: &str) -> Option<CartAction> {
    let Some(id) = el.data("id") else {
        tracing::warn!(action, "cart row control without data-id");
        return None;
    };
    let id = id.to_string();
    match action {
        "increment" => Some(CartAction::UpdateQuantity { id, delta: 1 }),
        "decrement" => Some(CartAction::UpdateQuantity { id, delta: -1 }),
        "remove" => Some(CartAction::Remove { id }),
        other => {
            tracing::warn!(action = other, "unknown cart row action");
            None
        }
    }
}
