//! Coupons

pub mod data;
pub mod errors;
pub mod models;
pub mod repository;
pub mod service;

pub use errors::{CouponStoreError, CouponsServiceError};
pub use service::*;
