//! App Router

use salvo::Router;

use crate::coupons;

/// Coupon routes, mounted under `/api/v1`.
pub(crate) fn app_router() -> Router {
    Router::with_path("api/v1")
        .push(Router::with_path("apply").post(coupons::apply::handler))
        .push(Router::with_path("create").post(coupons::create::handler))
        .push(
            Router::with_path("coupons")
                .post(coupons::index::handler)
                .push(Router::with_path("{code}").get(coupons::get::handler)),
        )
}
