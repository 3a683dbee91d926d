//! Apply Coupon Handler

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use coupons_app::domain::{
    baskets::Basket,
    coupons::ApplyOutcome,
};

use crate::{
    coupons::{errors::into_status_error, requests::ApplyCouponRequest},
    extensions::*,
};

/// Basket Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BasketResponse {
    /// The basket total
    #[salvo(schema(value_type = String))]
    pub value: Decimal,

    /// The discount recorded on the basket
    #[salvo(schema(value_type = String))]
    pub applied_discount: Decimal,

    /// Whether the coupon was applied
    pub application_successful: bool,
}

impl From<Basket> for BasketResponse {
    fn from(basket: Basket) -> Self {
        BasketResponse {
            value: basket.value,
            applied_discount: basket.applied_discount,
            application_successful: basket.application_successful,
        }
    }
}

/// Apply Coupon Handler
///
/// Applies the coupon to the basket and returns the updated basket.
#[endpoint(
    tags("coupons"),
    summary = "Apply Coupon",
    responses(
        (status_code = StatusCode::OK, description = "Coupon applied"),
        (status_code = StatusCode::CONFLICT, description = "Coupon was not applied to an empty basket"),
        (status_code = StatusCode::NOT_FOUND, description = "Coupon not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ApplyCouponRequest>,
    depot: &mut Depot,
) -> Result<Json<BasketResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let request = json.into_inner();

    request.validate()?;

    let mut basket = Basket::from(request.basket);

    info!(code = %request.code, "applying coupon");

    let outcome = state
        .app
        .coupons
        .apply(&mut basket, &request.code)
        .await
        .map_err(into_status_error)?;

    if outcome == ApplyOutcome::Unchanged {
        warn!(code = %request.code, "coupon application unsuccessful");

        return Err(StatusError::conflict().brief("Coupon was not applied"));
    }

    info!(code = %request.code, "applied coupon");

    Ok(Json(basket.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use coupons_app::domain::coupons::{CouponsServiceError, MockCouponsService};

    use crate::test_helpers::coupons_service;

    use super::*;

    fn make_service(coupons: MockCouponsService) -> Service {
        coupons_service(coupons, Router::with_path("apply").post(handler))
    }

    fn expect_only_apply(coupons: &mut MockCouponsService) {
        coupons.expect_get_coupon().never();
        coupons.expect_create_coupon().never();
        coupons.expect_get_coupons().never();
    }

    #[tokio::test]
    async fn test_apply_returns_discounted_basket() -> TestResult {
        let mut coupons = MockCouponsService::new();

        coupons
            .expect_apply()
            .once()
            .withf(|basket, code| basket.value == dec!(100) && code == "save10")
            .returning(|basket, _| {
                basket.apply_discount(dec!(10))?;

                Ok(ApplyOutcome::Applied)
            });

        expect_only_apply(&mut coupons);

        let mut res = TestClient::post("http://example.com/apply")
            .json(&json!({ "code": "save10", "basket": { "value": 100 } }))
            .send(&make_service(coupons))
            .await;

        let body: BasketResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.value, dec!(100));
        assert_eq!(body.applied_discount, dec!(10));
        assert!(body.application_successful);

        Ok(())
    }

    #[tokio::test]
    async fn test_apply_unchanged_basket_returns_409() -> TestResult {
        let mut coupons = MockCouponsService::new();

        coupons
            .expect_apply()
            .once()
            .returning(|_, _| Ok(ApplyOutcome::Unchanged));

        expect_only_apply(&mut coupons);

        let res = TestClient::post("http://example.com/apply")
            .json(&json!({ "code": "save10", "basket": { "value": 0 } }))
            .send(&make_service(coupons))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_apply_negative_basket_returns_400() -> TestResult {
        let mut coupons = MockCouponsService::new();

        coupons
            .expect_apply()
            .once()
            .returning(|_, _| Err(CouponsServiceError::InvalidBasket));

        expect_only_apply(&mut coupons);

        let res = TestClient::post("http://example.com/apply")
            .json(&json!({ "code": "save10", "basket": { "value": -1 } }))
            .send(&make_service(coupons))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_apply_unknown_code_returns_404() -> TestResult {
        let mut coupons = MockCouponsService::new();

        coupons
            .expect_apply()
            .once()
            .returning(|_, _| Err(CouponsServiceError::NotFound));

        expect_only_apply(&mut coupons);

        let res = TestClient::post("http://example.com/apply")
            .json(&json!({ "code": "missing", "basket": { "value": 100 } }))
            .send(&make_service(coupons))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_apply_blank_code_returns_400() -> TestResult {
        let mut coupons = MockCouponsService::new();

        coupons.expect_apply().never();
        expect_only_apply(&mut coupons);

        let res = TestClient::post("http://example.com/apply")
            .json(&json!({ "code": "", "basket": { "value": 100 } }))
            .send(&make_service(coupons))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
