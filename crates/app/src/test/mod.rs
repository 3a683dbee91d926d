//! Test support.

mod db;

pub(crate) use db::TestDb;
