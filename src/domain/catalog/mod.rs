//! Reference data: occupations, universities and study subjects.
//!
//! The built-in tables are the defaults; a data file can replace them at
//! start-up (see `adapters::catalog`).

mod catalog;
mod field;
mod records;

pub use catalog::{CatalogError, ReferenceCatalog};
pub use field::FieldOfStudy;
pub use records::{Occupation, Subject, University};
