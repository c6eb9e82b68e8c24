//! cart-hex: storefront cart core (cart manager, rendering, search) and its
//! inbound adapters (click dispatch, in-memory page).

pub mod config;
pub mod errors;

pub mod application;

pub use cart_types::{domain, ports};

pub mod inbound; // click dispatch + page adapters
