//! Basket Models

use rust_decimal::Decimal;

use crate::domain::baskets::errors::BasketError;

/// A basket total together with the outcome of the last coupon application.
///
/// Coupon application mutates the basket in place; callers keep ownership of
/// the same instance throughout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basket {
    pub value: Decimal,
    pub applied_discount: Decimal,
    pub application_successful: bool,
}

impl Basket {
    /// Create a basket with the given value and no discount applied.
    #[must_use]
    pub fn new(value: Decimal) -> Self {
        Self {
            value,
            applied_discount: Decimal::ZERO,
            application_successful: false,
        }
    }

    /// Record `discount` as applied to this basket.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::NegativeDiscount`] when `discount` is below zero;
    /// the basket is left untouched in that case.
    pub fn apply_discount(&mut self, discount: Decimal) -> Result<(), BasketError> {
        if discount < Decimal::ZERO {
            return Err(BasketError::NegativeDiscount);
        }

        self.applied_discount = discount;
        self.application_successful = true;

        Ok(())
    }
}
