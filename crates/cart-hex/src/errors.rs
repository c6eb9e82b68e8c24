use cart_types::ports::cart_store::StoreError;
use cart_types::ports::order_gateway::GatewayError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("order submission failed: {0}")]
    Transport(#[from] GatewayError),

    #[error("render error: {0}")]
    Render(#[from] askama::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
