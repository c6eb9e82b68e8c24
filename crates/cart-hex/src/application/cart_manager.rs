use cart_types::domain::cart::{Cart, QuantityUpdate};
use cart_types::ports::cart_store::CartStore;
use cart_types::ports::order_gateway::{OrderGateway, PlaceOrderRequest};
use cart_types::ports::page::Page;
use tracing::Instrument;

use crate::application::render;
use crate::errors::CartError;
use crate::inbound::events::CartAction;

pub const ORDER_PLACED_MESSAGE: &str = "Order Placed Successfully!";
const ORDER_FAILED_FALLBACK: &str = "Order could not be placed";

#[derive(Debug, Clone)]
pub struct CartSettings {
    /// Key the cart is stored under.
    pub storage_key: String,
    pub home_path: String,
    pub login_path: String,
    pub currency_symbol: String,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            storage_key: "storefront_cart".into(),
            home_path: "/".into(),
            login_path: "/login".into(),
            currency_symbol: "₹".into(),
        }
    }
}

/// How an order attempt ended, short of a transport failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    /// Nothing to order.
    Skipped,
    Placed,
    Rejected { message: String },
    LoginRequired { message: String },
}

/// Owns the cart and keeps store and page in step with it.
///
/// Every mutation goes through [`CartManager::persist`], which writes the
/// whole cart under the storage key and re-renders the page.
pub struct CartManager<S, G, P>
where
    S: CartStore,
    G: OrderGateway,
    P: Page,
{
    cart: Cart,
    store: S,
    gateway: G,
    page: P,
    settings: CartSettings,
}

impl<S, G, P> CartManager<S, G, P>
where
    S: CartStore,
    G: OrderGateway,
    P: Page,
{
    /// Reads the stored cart and renders it. Missing or malformed data
    /// starts an empty cart.
    pub async fn load(
        store: S,
        gateway: G,
        page: P,
        settings: CartSettings,
    ) -> Result<Self, CartError> {
        let cart = match store.get(&settings.storage_key).await? {
            None => Cart::new(),
            Some(raw) => Cart::from_json(&raw).unwrap_or_else(|e| {
                tracing::warn!(key = %settings.storage_key, error = %e, "discarding malformed stored cart");
                Cart::new()
            }),
        };
        tracing::info!(lines = cart.len(), items = cart.item_count(), "cart loaded");

        let mut manager = Self {
            cart,
            store,
            gateway,
            page,
            settings,
        };
        manager.render_ui()?;
        Ok(manager)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn settings(&self) -> &CartSettings {
        &self.settings
    }

    pub async fn add_item(
        &mut self,
        id: &str,
        name: &str,
        price: f64,
        image: &str,
    ) -> Result<(), CartError> {
        let quantity = self.cart.add(id, name, price, image);
        tracing::debug!(id, quantity, "item added");
        self.persist().await?;
        self.page.alert(&format!("{name} added to cart!"));
        Ok(())
    }

    pub async fn remove_item(&mut self, id: &str) -> Result<(), CartError> {
        let removed = self.cart.remove(id);
        tracing::debug!(id, removed, "item removed");
        self.persist().await
    }

    pub async fn update_quantity(&mut self, id: &str, delta: i32) -> Result<(), CartError> {
        match self.cart.update_quantity(id, delta) {
            QuantityUpdate::Missing => Ok(()),
            QuantityUpdate::Removed => {
                tracing::debug!(id, delta, "quantity dropped to zero, item removed");
                self.persist().await
            }
            QuantityUpdate::Changed(quantity) => {
                tracing::debug!(id, delta, quantity, "quantity updated");
                self.persist().await
            }
        }
    }

    /// Writes the full cart to the store, then re-renders.
    pub async fn persist(&mut self) -> Result<(), CartError> {
        let raw = self.cart.to_json()?;
        if let Err(e) = self.store.set(&self.settings.storage_key, &raw).await {
            tracing::error!(key = %self.settings.storage_key, error = %e, "failed to persist cart");
            return Err(e.into());
        }
        self.render_ui()
    }

    pub fn render_ui(&mut self) -> Result<(), CartError> {
        render::render(&self.cart, &mut self.page, &self.settings.currency_symbol)
    }

    /// Submits the cart. A transport failure is returned as an error and
    /// leaves the cart and page location untouched.
    pub async fn place_order(&mut self) -> Result<OrderOutcome, CartError> {
        if self.cart.is_empty() {
            return Ok(OrderOutcome::Skipped);
        }

        let request = PlaceOrderRequest {
            items: self.cart.items().to_vec(),
            total: self.cart.total(),
            request_id: uuid::Uuid::new_v4().to_string(),
        };
        let span = tracing::info_span!(
            "place_order",
            request_id = %request.request_id,
            items = request.items.len(),
            total = request.total
        );

        let response = match self
            .gateway
            .place_order(&request)
            .instrument(span.clone())
            .await
        {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(parent: &span, error = %e, "order submission failed");
                return Err(e.into());
            }
        };

        if response.success {
            tracing::info!(parent: &span, "order placed");
            self.page.alert(ORDER_PLACED_MESSAGE);
            self.cart.clear();
            self.persist().await?;
            self.page.navigate(&self.settings.home_path);
            return Ok(OrderOutcome::Placed);
        }

        let message = response
            .message
            .clone()
            .unwrap_or_else(|| ORDER_FAILED_FALLBACK.to_string());
        tracing::info!(parent: &span, %message, code = ?response.code, "order rejected");
        self.page.alert(&format!("Error: {message}"));

        if response.requires_login() {
            self.page.navigate(&self.settings.login_path);
            return Ok(OrderOutcome::LoginRequired { message });
        }
        Ok(OrderOutcome::Rejected { message })
    }

    /// Runs the action a click resolved to. Only `PlaceOrder` has an outcome.
    pub async fn handle(&mut self, action: CartAction) -> Result<Option<OrderOutcome>, CartError> {
        match action {
            CartAction::AddItem {
                id,
                name,
                price,
                image,
            } => self.add_item(&id, &name, price, &image).await?,
            CartAction::UpdateQuantity { id, delta } => self.update_quantity(&id, delta).await?,
            CartAction::Remove { id } => self.remove_item(&id).await?,
            CartAction::PlaceOrder => return self.place_order().await.map(Some),
            CartAction::ToggleNav => self.page.toggle_nav(),
        }
        Ok(None)
    }
}
