//! Coupon Models

use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Coupon UUID
pub type CouponUuid = TypedUuid<Coupon>;

/// Coupon Model
///
/// Two coupons are equal when they share the same identity.
#[derive(Debug, Clone)]
pub struct Coupon {
    pub uuid: CouponUuid,
    pub code: String,
    pub discount: Decimal,
    pub min_basket_value: Option<Decimal>,
}

impl PartialEq for Coupon {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for Coupon {}

/// New Coupon Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCoupon {
    pub code: String,
    pub discount: Decimal,
    pub min_basket_value: Option<Decimal>,
}
