//! Projection of cart state onto a [`Page`].
//!
//! Rendering is a pure function of the cart: calling it twice leaves the page
//! in the same state. Each region is checked independently, so a page that
//! carries no summary (or no badge) is left untouched there.

use askama::Template;
use cart_types::domain::cart::Cart;
use cart_types::ports::page::{Page, SummaryRow, SummaryView};

use crate::errors::CartError;

pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

#[derive(Template)]
#[template(path = "cart_items.html")]
struct CartItemsTemplate<'a> {
    rows: &'a [SummaryRow],
}

#[derive(Template)]
#[template(source = r#"<p class="empty-msg">{{ message }}</p>"#, ext = "html")]
struct EmptyCartTemplate<'a> {
    message: &'a str,
}

/// Unit price as listed on a row: shortest decimal form, e.g. `₹50`, `₹49.5`.
pub fn format_price(currency: &str, price: f64) -> String {
    format!("{currency}{price}")
}

/// Summary total, always two decimals.
pub fn format_total(currency: &str, total: f64) -> String {
    format!("{currency}{total:.2}")
}

pub fn badge_text(cart: &Cart) -> String {
    cart.item_count().to_string()
}

pub fn summary_view(cart: &Cart, currency: &str) -> Result<SummaryView, CartError> {
    if cart.is_empty() {
        let markup = EmptyCartTemplate {
            message: EMPTY_CART_MESSAGE,
        }
        .render()?;
        return Ok(SummaryView {
            rows: Vec::new(),
            markup,
            count: "0".into(),
            total: format!("{currency}0"),
        });
    }

    let rows: Vec<SummaryRow> = cart
        .items()
        .iter()
        .map(|item| SummaryRow {
            id: item.id.clone(),
            name: item.name.clone(),
            image: item.image.clone(),
            quantity: item.quantity,
            line: format!("{} x {}", format_price(currency, item.price), item.quantity),
        })
        .collect();
    let markup = CartItemsTemplate { rows: &rows }.render()?;

    Ok(SummaryView {
        rows,
        markup,
        count: cart.item_count().to_string(),
        total: format_total(currency, cart.total()),
    })
}

pub fn render<P: Page + ?Sized>(cart: &Cart, page: &mut P, currency: &str) -> Result<(), CartError> {
    if page.has_badge() {
        page.set_badge(&badge_text(cart));
    }
    if page.has_summary() {
        let summary = summary_view(cart, currency)?;
        page.show_summary(&summary);
    }
    Ok(())
}
