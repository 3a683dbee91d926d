//! Coupon Domain Concerns

pub mod baskets;
pub mod coupons;
