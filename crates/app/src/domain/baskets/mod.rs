//! Baskets

pub mod errors;
pub mod models;

pub use errors::BasketError;
pub use models::Basket;
