//! HTTP and CLI host for the retail analytics engines.

pub mod api;
pub mod cli;
pub mod planner;
pub mod router;
pub mod startup;
pub mod state;
