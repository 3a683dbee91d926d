//! Coupon Errors

use salvo::http::StatusError;
use tracing::error;

use coupons_app::domain::coupons::{CouponStoreError, CouponsServiceError};

pub(crate) fn into_status_error(error: CouponsServiceError) -> StatusError {
    match error {
        CouponsServiceError::NotFound => StatusError::not_found().brief("Coupon not found"),
        CouponsServiceError::InvalidBasket => {
            StatusError::bad_request().brief("Basket value must not be negative")
        }
        CouponsServiceError::InvalidInput => {
            StatusError::bad_request().brief("Invalid coupon payload")
        }
        CouponsServiceError::InvalidCoupon(source) => {
            error!("stored coupon cannot be applied: {source}");

            StatusError::unprocessable_entity().brief("Coupon cannot be applied")
        }
        CouponsServiceError::Store(CouponStoreError::AlreadyExists) => {
            StatusError::conflict().brief("Coupon already exists")
        }
        CouponsServiceError::Store(
            CouponStoreError::MissingRequiredData | CouponStoreError::InvalidData,
        ) => StatusError::bad_request().brief("Invalid coupon payload"),
        CouponsServiceError::Store(CouponStoreError::Sql(source)) => {
            error!("coupon storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
