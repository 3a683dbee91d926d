//! Coupons service.

use std::{
    cmp::Ordering,
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::domain::{
    baskets::Basket,
    coupons::{
        data::NewCouponRequest,
        errors::CouponsServiceError,
        models::{Coupon, NewCoupon},
        repository::CouponStore,
    },
};

/// Successful outcomes of applying a coupon to a basket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The coupon's discount was recorded on the basket.
    Applied,

    /// The basket was empty and has been left as it was.
    Unchanged,
}

#[derive(Clone)]
pub struct CouponApplicationService {
    store: Arc<dyn CouponStore>,
}

impl CouponApplicationService {
    #[must_use]
    pub fn new(store: Arc<dyn CouponStore>) -> Self {
        Self { store }
    }
}

impl Debug for CouponApplicationService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CouponApplicationService")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CouponsService for CouponApplicationService {
    async fn get_coupon(&self, code: &str) -> Result<Coupon, CouponsServiceError> {
        debug!(code, "looking up coupon");

        self.store
            .find_by_code(code)
            .await?
            .ok_or(CouponsServiceError::NotFound)
    }

    async fn apply(
        &self,
        basket: &mut Basket,
        code: &str,
    ) -> Result<ApplyOutcome, CouponsServiceError> {
        let coupon = self.get_coupon(code).await?;

        // The discount is taken verbatim; `min_basket_value` plays no part here.
        match basket.value.cmp(&Decimal::ZERO) {
            Ordering::Greater => {
                basket.apply_discount(coupon.discount)?;

                Ok(ApplyOutcome::Applied)
            }
            Ordering::Equal => Ok(ApplyOutcome::Unchanged),
            Ordering::Less => {
                warn!(code, value = %basket.value, "tried to apply coupon to a negative basket");

                Err(CouponsServiceError::InvalidBasket)
            }
        }
    }

    async fn create_coupon(
        &self,
        request: Option<NewCouponRequest>,
    ) -> Result<Coupon, CouponsServiceError> {
        let request = request.ok_or(CouponsServiceError::InvalidInput)?;

        let code = request
            .code
            .filter(|code| !code.is_empty())
            .ok_or(CouponsServiceError::InvalidInput)?;

        let coupon = self
            .store
            .save(NewCoupon {
                code: code.to_lowercase(),
                discount: request.discount,
                min_basket_value: request.min_basket_value,
            })
            .await?;

        info!(uuid = %coupon.uuid, code = %coupon.code, "created coupon");

        Ok(coupon)
    }

    async fn get_coupons(&self, codes: &[String]) -> Result<Vec<Coupon>, CouponsServiceError> {
        let mut coupons = Vec::with_capacity(codes.len());

        for code in codes {
            coupons.push(self.get_coupon(code).await?);
        }

        Ok(coupons)
    }
}

#[automock]
#[async_trait]
pub trait CouponsService: Send + Sync {
    /// Retrieve the coupon with exactly this code.
    async fn get_coupon(&self, code: &str) -> Result<Coupon, CouponsServiceError>;

    /// Apply the coupon identified by `code` to `basket`, mutating it in place.
    async fn apply(
        &self,
        basket: &mut Basket,
        code: &str,
    ) -> Result<ApplyOutcome, CouponsServiceError>;

    /// Create a coupon, storing its code in lowercase.
    async fn create_coupon(
        &self,
        request: Option<NewCouponRequest>,
    ) -> Result<Coupon, CouponsServiceError>;

    /// Retrieve every coupon in `codes`, in the same order.
    async fn get_coupons(&self, codes: &[String]) -> Result<Vec<Coupon>, CouponsServiceError>;
}
