//! Get Coupon Handler

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use coupons_app::domain::coupons::models::Coupon;

use crate::{coupons::errors::into_status_error, extensions::*};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CouponResponse {
    /// The unique identifier of the coupon
    pub uuid: Uuid,

    /// The coupon code
    pub code: String,

    /// The flat discount the coupon grants
    #[salvo(schema(value_type = String))]
    pub discount: Decimal,

    /// The minimum basket value for the coupon
    #[salvo(schema(value_type = Option<String>))]
    pub min_basket_value: Option<Decimal>,
}

impl From<Coupon> for CouponResponse {
    fn from(coupon: Coupon) -> Self {
        CouponResponse {
            uuid: coupon.uuid.into(),
            code: coupon.code,
            discount: coupon.discount,
            min_basket_value: coupon.min_basket_value,
        }
    }
}

/// Get Coupon Handler
///
/// Returns the coupon whose code matches exactly.
#[endpoint(tags("coupons"), summary = "Get Coupon")]
pub(crate) async fn handler(
    code: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CouponResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let coupon = state
        .app
        .coupons
        .get_coupon(&code.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(coupon.into()))
}
