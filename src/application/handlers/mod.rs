//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;
pub mod study_plan;
