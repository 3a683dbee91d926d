//! Basket errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BasketError {
    #[error("discount cannot be negative")]
    NegativeDiscount,
}
