//! The reference catalog: the tables every matcher reads from.

use std::collections::HashSet;
use thiserror::Error;

use super::{FieldOfStudy, Occupation, Subject, University};
use crate::domain::assessment::{Interest, PersonalityTrait};

/// Errors raised while loading or validating reference data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Unsupported catalog format '{0}', expected yaml, yml or json")]
    UnsupportedFormat(String),

    #[error("Catalog table '{0}' is empty")]
    EmptyTable(&'static str),

    #[error("Duplicate {table} entry '{name}'")]
    DuplicateName { table: &'static str, name: String },

    #[error("Invalid {table} entry '{name}': {reason}")]
    InvalidEntry {
        table: &'static str,
        name: String,
        reason: String,
    },
}

/// Immutable reference tables shared by all matchers.
///
/// Table order matters: ranking ties resolve to the earlier entry.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReferenceCatalog {
    pub occupations: Vec<Occupation>,
    pub universities: Vec<University>,
    pub subjects: Vec<Subject>,
}

impl ReferenceCatalog {
    /// Builds a catalog from explicit tables after validating them.
    pub fn new(
        occupations: Vec<Occupation>,
        universities: Vec<University>,
        subjects: Vec<Subject>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            occupations,
            universities,
            subjects,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in reference data.
    pub fn builtin() -> Self {
        use FieldOfStudy as F;
        use Interest as I;
        use PersonalityTrait as P;

        let occupations = vec![
            Occupation::new(
                "Software Developer",
                "Develops applications and systems using programming languages",
                [P::Analytical, P::Creative, P::DetailOriented],
                [I::Programming, I::ProblemSolving, I::Technology],
                "Bachelor's degree in Computer Science",
            ),
            Occupation::new(
                "Data Scientist",
                "Analyzes data and builds models to extract insights",
                [P::Analytical, P::Curious, P::Technical],
                [I::Mathematics, I::Statistics, I::Technology],
                "Master's degree in Data Science or related field",
            ),
            Occupation::new(
                "Doctor",
                "Diagnoses and treats medical conditions",
                [P::Compassionate, P::DetailOriented, P::Patient],
                [I::Biology, I::Chemistry, I::HelpingOthers],
                "Medical Degree (MD)",
            ),
            Occupation::new(
                "Teacher",
                "Educates students in various subjects",
                [P::Patient, P::Communicative, P::Organized],
                [I::Education, I::Communication, I::Mentoring],
                "Bachelor's degree in Education",
            ),
            Occupation::new(
                "Lawyer",
                "Provides legal advice and represents clients",
                [P::Analytical, P::Persuasive, P::DetailOriented],
                [I::Debate, I::Research, I::Writing],
                "Law Degree (JD)",
            ),
            Occupation::new(
                "Accountant",
                "Prepares and examines financial records",
                [P::DetailOriented, P::Analytical, P::Organized],
                [I::Mathematics, I::Business, I::Organization],
                "Bachelor's degree in Accounting",
            ),
        ];

        let universities = vec![
            University::new(
                "MIT",
                "Massachusetts",
                [F::ComputerScience, F::Engineering, F::Mathematics],
                55000,
                0.07,
                0.94,
            ),
            University::new(
                "Stanford",
                "California",
                [F::ComputerScience, F::Business, F::Medicine],
                57000,
                0.05,
                0.96,
            ),
            University::new(
                "Harvard",
                "Massachusetts",
                [F::Law, F::Business, F::Medicine],
                54000,
                0.05,
                0.97,
            ),
            University::new(
                "UC Berkeley",
                "California",
                [F::ComputerScience, F::Engineering, F::Business],
                43000,
                0.16,
                0.91,
            ),
            University::new(
                "Georgia Tech",
                "Georgia",
                [F::Engineering, F::ComputerScience, F::Mathematics],
                33000,
                0.21,
                0.87,
            ),
            University::new(
                "University of Michigan",
                "Michigan",
                [F::Engineering, F::Business, F::Medicine],
                49000,
                0.23,
                0.92,
            ),
        ];

        let subjects = vec![
            Subject::new(
                "Computer Science",
                ["Introduction to Algorithms by Cormen et al."],
                ["CS50 (Harvard)", "Introduction to Computer Science (MIT)"],
                "https://www.youtube.com/c/MITOpenCourseWare",
            ),
            Subject::new(
                "Data Science",
                ["Python for Data Analysis by Wes McKinney"],
                ["Data Science Specialization (Coursera)", "Machine Learning (Stanford)"],
                "https://www.youtube.com/c/3blue1brown",
            ),
            Subject::new(
                "Medicine",
                ["Gray's Anatomy"],
                ["Introduction to Medicine (Coursera)", "Human Anatomy (edX)"],
                "https://www.youtube.com/c/osmosis",
            ),
            Subject::new(
                "Education",
                ["Teaching to Transgress by bell hooks"],
                ["Teaching Methods (Coursera)", "Educational Psychology (edX)"],
                "https://www.youtube.com/c/edutopia",
            ),
            Subject::new(
                "Law",
                ["Law 101 by Jay Feinman"],
                ["Introduction to Law (Coursera)", "Contract Law (edX)"],
                "https://www.youtube.com/c/LexFridman",
            ),
            Subject::new(
                "Accounting",
                ["Financial Accounting by Warren et al."],
                ["Financial Accounting (Coursera)", "Taxation Principles (edX)"],
                "https://www.youtube.com/c/AccountingStuff",
            ),
        ];

        Self {
            occupations,
            universities,
            subjects,
        }
    }

    pub fn occupations(&self) -> &[Occupation] {
        &self.occupations
    }

    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Checks table-level invariants.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.occupations.is_empty() {
            return Err(CatalogError::EmptyTable("occupations"));
        }
        if self.universities.is_empty() {
            return Err(CatalogError::EmptyTable("universities"));
        }
        if self.subjects.is_empty() {
            return Err(CatalogError::EmptyTable("subjects"));
        }

        ensure_unique("occupation", self.occupations.iter().map(|o| o.name.as_str()))?;
        ensure_unique("university", self.universities.iter().map(|u| u.name.as_str()))?;
        ensure_unique("subject", self.subjects.iter().map(|s| s.name.as_str()))?;

        for occupation in &self.occupations {
            if occupation.name.trim().is_empty() {
                return Err(invalid("occupation", &occupation.name, "name is empty"));
            }
            if occupation.traits.is_empty() && occupation.interests.is_empty() {
                return Err(invalid(
                    "occupation",
                    &occupation.name,
                    "needs at least one trait or interest tag",
                ));
            }
        }

        for university in &self.universities {
            if university.name.trim().is_empty() {
                return Err(invalid("university", &university.name, "name is empty"));
            }
            for (label, rate) in [
                ("acceptance_rate", university.acceptance_rate),
                ("graduation_rate", university.graduation_rate),
            ] {
                if !(0.0..=1.0).contains(&rate) {
                    return Err(invalid(
                        "university",
                        &university.name,
                        format!("{} must be within [0, 1], got {}", label, rate),
                    ));
                }
            }
        }

        for subject in &self.subjects {
            if subject.name.trim().is_empty() {
                return Err(invalid("subject", &subject.name, "name is empty"));
            }
            if subject.video.trim().is_empty() {
                return Err(invalid("subject", &subject.name, "video link is empty"));
            }
        }

        Ok(())
    }
}

impl Default for ReferenceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn ensure_unique<'a>(
    table: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(CatalogError::DuplicateName {
                table,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

fn invalid(table: &'static str, name: &str, reason: impl Into<String>) -> CatalogError {
    CatalogError::InvalidEntry {
        table,
        name: name.to_string(),
        reason: reason.into(),
    }
}
