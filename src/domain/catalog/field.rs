//! Fields of study and education-requirement classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A university program / field of study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldOfStudy {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Medicine")]
    Medicine,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Law")]
    Law,
    #[serde(rename = "Accounting")]
    Accounting,
    #[serde(rename = "Engineering")]
    Engineering,
    #[serde(rename = "Business")]
    Business,
    #[serde(rename = "Mathematics")]
    Mathematics,
}

/// Keyword checks in priority order; the first keyword found wins.
///
/// Medicine is keyed on "Medical", so "Medical Degree (MD)" classifies
/// while a requirement that only says "Medicine" does not. Scoring weights
/// were tuned against this order, keep it as is.
const CLASSIFICATION_ORDER: [(&str, FieldOfStudy); 8] = [
    ("Computer Science", FieldOfStudy::ComputerScience),
    ("Data Science", FieldOfStudy::DataScience),
    ("Medical", FieldOfStudy::Medicine),
    ("Education", FieldOfStudy::Education),
    ("Law", FieldOfStudy::Law),
    ("Accounting", FieldOfStudy::Accounting),
    ("Engineering", FieldOfStudy::Engineering),
    ("Business", FieldOfStudy::Business),
];

impl FieldOfStudy {
    /// Classifies an education requirement into at most one field.
    ///
    /// Matching is a case-sensitive substring test against the keywords in
    /// [`CLASSIFICATION_ORDER`].
    pub fn classify(education_required: &str) -> Option<FieldOfStudy> {
        CLASSIFICATION_ORDER
            .iter()
            .find(|(keyword, _)| education_required.contains(keyword))
            .map(|(_, field)| *field)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            FieldOfStudy::ComputerScience => "Computer Science",
            FieldOfStudy::DataScience => "Data Science",
            FieldOfStudy::Medicine => "Medicine",
            FieldOfStudy::Education => "Education",
            FieldOfStudy::Law => "Law",
            FieldOfStudy::Accounting => "Accounting",
            FieldOfStudy::Engineering => "Engineering",
            FieldOfStudy::Business => "Business",
            FieldOfStudy::Mathematics => "Mathematics",
        }
    }
}

impl fmt::Display for FieldOfStudy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
