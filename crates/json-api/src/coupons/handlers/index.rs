//! Coupon Index Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    coupons::{errors::into_status_error, get::CouponResponse, requests::CouponCodesRequest},
    extensions::*,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CouponsResponse {
    /// The coupons, in the order their codes were requested
    pub coupons: Vec<CouponResponse>,
}

/// Coupon Index Handler
///
/// Returns the coupons for every requested code, or fails if any is unknown.
#[endpoint(
    tags("coupons"),
    summary = "List Coupons",
    responses(
        (status_code = StatusCode::OK, description = "All coupons found"),
        (status_code = StatusCode::NOT_FOUND, description = "A coupon code is unknown"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CouponCodesRequest>,
    depot: &mut Depot,
) -> Result<Json<CouponsResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let request = json.into_inner();

    request.validate()?;

    let coupons = state
        .app
        .coupons
        .get_coupons(&request.codes)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CouponsResponse {
        coupons: coupons.into_iter().map(Into::into).collect(),
    }))
}
