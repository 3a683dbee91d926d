//! Coupons service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::baskets::BasketError;

#[derive(Debug, Error)]
pub enum CouponsServiceError {
    #[error("coupon not found")]
    NotFound,

    #[error("negative basket value")]
    InvalidBasket,

    #[error("missing or empty coupon code")]
    InvalidInput,

    #[error("stored coupon cannot be applied")]
    InvalidCoupon(#[from] BasketError),

    #[error("coupon store failure")]
    Store(#[from] CouponStoreError),
}

#[derive(Debug, Error)]
pub enum CouponStoreError {
    #[error("coupon already exists")]
    AlreadyExists,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CouponStoreError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}
