//! Coupons Requests

use rust_decimal::Decimal;
use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};

use coupons_app::domain::{baskets::Basket, coupons::data::NewCouponRequest};

/// Longest coupon code the store accepts.
pub(crate) const MAX_CODE_LENGTH: usize = 250;

/// Apply Coupon Request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub(crate) struct ApplyCouponRequest {
    /// The code of the coupon to apply
    pub code: String,

    /// The basket to apply the coupon to
    pub basket: BasketRequest,
}

impl ApplyCouponRequest {
    pub(crate) fn validate(&self) -> Result<(), StatusError> {
        require_code(&self.code)
    }
}

/// Basket Request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub(crate) struct BasketRequest {
    /// The current basket total
    #[salvo(schema(value_type = String))]
    pub value: Decimal,
}

impl From<BasketRequest> for Basket {
    fn from(request: BasketRequest) -> Self {
        Basket::new(request.value)
    }
}

/// Create Coupon Request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub(crate) struct CreateCouponRequest {
    /// The coupon code; stored in lowercase
    pub code: String,

    /// The flat discount the coupon grants
    #[salvo(schema(value_type = String))]
    pub discount: Decimal,

    /// The minimum basket value for the coupon
    #[serde(default)]
    #[salvo(schema(value_type = Option<String>))]
    pub min_basket_value: Option<Decimal>,
}

impl CreateCouponRequest {
    pub(crate) fn validate(&self) -> Result<(), StatusError> {
        require_code(&self.code)?;

        // Codes are stored lowercased, and lowercasing can lengthen them.
        if self.code.to_lowercase().chars().count() > MAX_CODE_LENGTH {
            return Err(StatusError::bad_request().brief("Coupon code is too long"));
        }

        if self.discount < Decimal::ZERO {
            return Err(StatusError::bad_request().brief("Discount must not be negative"));
        }

        if self.min_basket_value.is_some_and(|value| value < Decimal::ZERO) {
            return Err(StatusError::bad_request().brief("Minimum basket value must not be negative"));
        }

        Ok(())
    }
}

impl From<CreateCouponRequest> for NewCouponRequest {
    fn from(request: CreateCouponRequest) -> Self {
        NewCouponRequest {
            code: Some(request.code),
            discount: request.discount,
            min_basket_value: request.min_basket_value,
        }
    }
}

/// Coupon Codes Request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub(crate) struct CouponCodesRequest {
    /// The codes to look up, in the order the coupons should be returned
    pub codes: Vec<String>,
}

impl CouponCodesRequest {
    pub(crate) fn validate(&self) -> Result<(), StatusError> {
        if self.codes.is_empty() {
            return Err(StatusError::bad_request().brief("At least one coupon code is required"));
        }

        self.codes.iter().try_for_each(|code| require_code(code))
    }
}

fn require_code(code: &str) -> Result<(), StatusError> {
    if code.trim().is_empty() {
        return Err(StatusError::bad_request().brief("Coupon code must not be blank"));
    }

    Ok(())
}
