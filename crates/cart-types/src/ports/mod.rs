pub mod cart_store;
pub mod order_gateway;
pub mod page;
