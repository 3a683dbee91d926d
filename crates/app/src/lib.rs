//! Coupon domain, persistence and application logic.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

mod uuids;
