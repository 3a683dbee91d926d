//! Coupons Data

use rust_decimal::Decimal;

/// Coupon creation request as received from a caller.
///
/// `code` may be missing here; the service rejects such requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCouponRequest {
    pub code: Option<String>,
    pub discount: Decimal,
    pub min_basket_value: Option<Decimal>,
}
