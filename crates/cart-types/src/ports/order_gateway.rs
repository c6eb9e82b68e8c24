use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::cart::CartItem;

/// Body of the order submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceOrderRequest {
    pub items: Vec<CartItem>,
    pub total: f64,
    /// Correlation id, sent as a header rather than in the body.
    #[serde(skip)]
    pub request_id: String,
}

/// What the order endpoint answers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaceOrderResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Machine-readable failure code, preferred over message matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl PlaceOrderResponse {
    pub const AUTH_REQUIRED: &'static str = "auth_required";

    pub fn requires_login(&self) -> bool {
        if self.success {
            return false;
        }
        match self.code.as_deref() {
            Some(code) => code == Self::AUTH_REQUIRED,
            None => self
                .message
                .as_deref()
                .is_some_and(|m| m.contains("login")),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GatewayError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait OrderGateway: Send + Sync + 'static {
    async fn place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> Result<PlaceOrderResponse, GatewayError>;
}
