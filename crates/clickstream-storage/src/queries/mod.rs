//! SQL for the pending event table, one module per concern.

pub mod aggregation;
pub mod event_ops;
pub mod maintenance;
