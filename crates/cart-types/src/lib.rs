//! cart-types: storefront cart domain and the ports the cart core drives.

pub mod domain;
pub mod ports;
