//! Coupons Repository

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::coupons::{
    errors::CouponStoreError,
    models::{Coupon, CouponUuid, NewCoupon},
};

const FIND_COUPON_BY_CODE_SQL: &str = include_str!("sql/find_coupon_by_code.sql");
const CREATE_COUPON_SQL: &str = include_str!("sql/create_coupon.sql");

/// Keyed storage for coupon records.
#[automock]
#[async_trait]
pub trait CouponStore: Send + Sync {
    /// Find the coupon whose code matches `code` exactly.
    async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, CouponStoreError>;

    /// Persist a coupon, returning the stored record with its assigned identity.
    async fn save(&self, coupon: NewCoupon) -> Result<Coupon, CouponStoreError>;
}

#[derive(Debug, Clone)]
pub struct PgCouponStore {
    pool: PgPool,
}

impl PgCouponStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CouponStore for PgCouponStore {
    async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, CouponStoreError> {
        query_as::<Postgres, Coupon>(FIND_COUPON_BY_CODE_SQL)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn save(&self, coupon: NewCoupon) -> Result<Coupon, CouponStoreError> {
        query_as::<Postgres, Coupon>(CREATE_COUPON_SQL)
            .bind(CouponUuid::new().into_uuid())
            .bind(coupon.code)
            .bind(coupon.discount)
            .bind(coupon.min_basket_value)
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }
}

impl<'r> FromRow<'r, PgRow> for Coupon {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CouponUuid::from_uuid(row.try_get("uuid")?),
            code: row.try_get("code")?,
            discount: row.try_get::<Decimal, _>("discount")?,
            min_basket_value: row.try_get::<Option<Decimal>, _>("min_basket_value")?,
        })
    }
}
