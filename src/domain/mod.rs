//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, answer scores, errors)
//! - `assessment` - Questionnaire, answer aggregation and the assessment aggregate
//! - `catalog` - Reference occupations, universities and study subjects
//! - `matching` - Career and university ranking
//! - `study_plan` - Subject matching and the four-year study plan template

pub mod assessment;
pub mod catalog;
pub mod foundation;
pub mod matching;
pub mod study_plan;
