//! HTTP handlers and their request/response types.

pub mod doc;
pub mod health;
pub mod query;

pub use health::health;
pub use query::{formal_wear_query, franchise_ops_query, inventory_query, store_performance_query};
