pub mod cart_manager;
pub mod render;
pub mod search;
