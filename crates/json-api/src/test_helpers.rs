//! Test helpers.

use std::sync::Arc;

use rust_decimal_macros::dec;
use salvo::{affix_state::inject, prelude::*};

use coupons_app::domain::coupons::{
    MockCouponsService,
    models::{Coupon, CouponUuid},
};

use crate::state::State;

pub(crate) fn make_coupon(code: &str) -> Coupon {
    Coupon {
        uuid: CouponUuid::new(),
        code: code.to_string(),
        discount: dec!(10),
        min_basket_value: Some(dec!(50)),
    }
}

pub(crate) fn coupons_service(coupons: MockCouponsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(Arc::new(State::new(Arc::new(coupons)))))
            .push(route),
    )
}
