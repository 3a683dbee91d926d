//! Create Coupon Handler

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    coupons::{errors::into_status_error, get::CouponResponse, requests::CreateCouponRequest},
    extensions::*,
};

/// Characters escaped when a coupon code is written as a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn coupon_location(code: &str) -> String {
    format!("/api/v1/coupons/{}", utf8_percent_encode(code, PATH_SEGMENT))
}

/// Create Coupon Handler
#[endpoint(
    tags("coupons"),
    summary = "Create Coupon",
    responses(
        (status_code = StatusCode::CREATED, description = "Coupon created"),
        (status_code = StatusCode::CONFLICT, description = "Coupon already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCouponRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CouponResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let request = json.into_inner();

    request.validate()?;

    let coupon = state
        .app
        .coupons
        .create_coupon(Some(request.into()))
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, coupon_location(&coupon.code), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(coupon.into()))
}
