//! Career Compass - questionnaire-driven career guidance
//!
//! Scores a short personality and interest questionnaire, recommends
//! careers and universities from reference tables, and generates four-year
//! study plans for a free-text major by embedding similarity.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod server;
