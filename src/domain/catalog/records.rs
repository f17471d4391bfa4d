//! Reference records: occupations, universities and study subjects.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::FieldOfStudy;
use crate::domain::assessment::{Interest, PersonalityTrait};

/// An occupation that can be recommended as a career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occupation {
    pub name: String,
    pub description: String,
    pub traits: BTreeSet<PersonalityTrait>,
    pub interests: BTreeSet<Interest>,
    pub education_required: String,
}

impl Occupation {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        traits: impl IntoIterator<Item = PersonalityTrait>,
        interests: impl IntoIterator<Item = Interest>,
        education_required: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            traits: traits.into_iter().collect(),
            interests: interests.into_iter().collect(),
            education_required: education_required.into(),
        }
    }

    /// The field of study implied by the education requirement, if any.
    pub fn field_of_study(&self) -> Option<FieldOfStudy> {
        FieldOfStudy::classify(&self.education_required)
    }
}

/// A university with its programs and headline statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub name: String,
    pub location: String,
    pub programs: BTreeSet<FieldOfStudy>,
    /// Annual cost in USD.
    pub cost: u32,
    pub acceptance_rate: f64,
    pub graduation_rate: f64,
}

impl University {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        programs: impl IntoIterator<Item = FieldOfStudy>,
        cost: u32,
        acceptance_rate: f64,
        graduation_rate: f64,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            programs: programs.into_iter().collect(),
            cost,
            acceptance_rate,
            graduation_rate,
        }
    }

    /// Returns true if the university offers the given program.
    pub fn offers(&self, field: FieldOfStudy) -> bool {
        self.programs.contains(&field)
    }
}

/// A study subject with its learning resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub books: Vec<String>,
    pub courses: Vec<String>,
    pub video: String,
}

impl Subject {
    pub fn new(
        name: impl Into<String>,
        books: impl IntoIterator<Item = impl Into<String>>,
        courses: impl IntoIterator<Item = impl Into<String>>,
        video: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            books: books.into_iter().map(Into::into).collect(),
            courses: courses.into_iter().map(Into::into).collect(),
            video: video.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupation_classifies_its_education_requirement() {
        let occupation = Occupation::new(
            "Doctor",
            "Diagnoses and treats illnesses",
            [PersonalityTrait::Compassionate],
            [Interest::Biology],
            "Medical Degree (MD)",
        );
        assert_eq!(occupation.field_of_study(), Some(FieldOfStudy::Medicine));
    }

    #[test]
    fn occupation_deserializes_tag_names() {
        let yaml = r#"
name: Software Developer
description: Builds software
traits: [analytical, detail-oriented]
interests: [programming, problem-solving]
education_required: Bachelor's degree in Computer Science
"#;
        let occupation: Occupation = serde_yaml::from_str(yaml).unwrap();
        assert!(occupation.traits.contains(&PersonalityTrait::DetailOriented));
        assert!(occupation.interests.contains(&Interest::ProblemSolving));
    }

    #[test]
    fn occupation_rejects_unknown_tags() {
        let yaml = r#"
name: Astronaut
description: Flies
traits: [brave]
interests: []
education_required: None
"#;
        assert!(serde_yaml::from_str::<Occupation>(yaml).is_err());
    }

    #[test]
    fn university_reports_offered_programs() {
        let mit = University::new(
            "MIT",
            "Massachusetts",
            [FieldOfStudy::ComputerScience, FieldOfStudy::Engineering],
            55000,
            0.07,
            0.94,
        );
        assert!(mit.offers(FieldOfStudy::ComputerScience));
        assert!(!mit.offers(FieldOfStudy::Law));
    }
}
