//! Database module for PostgreSQL connection and operations.

mod pool;
mod queries;
mod schema;

pub use pool::{DatabasePool, PoolError, PoolPolicy};
pub use queries::{fetch_all_users, select_one};
pub use schema::*;
