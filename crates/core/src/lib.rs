pub mod config;
pub mod error;
pub mod query;
pub mod row;

pub use config::Config;
pub use error::*;
pub use query::*;
pub use row::*;
