//! The study plan document and its fixed four-year template.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Subject;

/// A generated study plan for a major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub major: String,
    pub matched_subject: String,
    pub resources: StudyResources,
    pub study_timeline: StudyTimeline,
}

/// Learning resources copied from the matched subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyResources {
    pub books: Vec<String>,
    pub courses: Vec<String>,
    /// A single link, kept under the plural name used by the plan format.
    pub videos: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyTimeline {
    pub year_1: YearPlan,
    pub year_2: YearPlan,
    pub year_3: YearPlan,
    pub year_4: YearPlan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearPlan {
    pub focus: String,
    pub courses: Vec<String>,
    pub projects: Vec<String>,
}

impl YearPlan {
    fn new(focus: &str, courses: [String; 2], project: &str) -> Self {
        Self {
            focus: focus.to_string(),
            courses: courses.into(),
            projects: vec![project.to_string()],
        }
    }
}

impl StudyTimeline {
    /// The four-year template for a subject.
    pub fn for_subject(subject: &str) -> Self {
        Self {
            year_1: YearPlan::new(
                "Fundamentals",
                [format!("Introduction to {}", subject), "Basic Principles".to_string()],
                "Simple application of concepts",
            ),
            year_2: YearPlan::new(
                "Core Concepts",
                [format!("Intermediate {}", subject), "Specialized Topics".to_string()],
                "More complex application of concepts",
            ),
            year_3: YearPlan::new(
                "Advanced Topics",
                [format!("Advanced {}", subject), "Research Methods".to_string()],
                "Independent research project",
            ),
            year_4: YearPlan::new(
                "Specialization",
                ["Specialized Electives".to_string(), "Capstone Project".to_string()],
                "Comprehensive capstone project",
            ),
        }
    }
}

impl StudyPlan {
    /// Builds the plan for `major` from the matched subject's resources.
    pub fn assemble(major: impl Into<String>, subject: &Subject) -> Self {
        Self {
            major: major.into(),
            matched_subject: subject.name.clone(),
            resources: StudyResources {
                books: subject.books.clone(),
                courses: subject.courses.clone(),
                videos: subject.video.clone(),
            },
            study_timeline: StudyTimeline::for_subject(&subject.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ReferenceCatalog;

    #[test]
    fn assembles_plan_from_subject() {
        let catalog = ReferenceCatalog::builtin();
        let law = &catalog.subjects()[4];

        let plan = StudyPlan::assemble("Legal Studies", law);

        assert_eq!(plan.major, "Legal Studies");
        assert_eq!(plan.matched_subject, "Law");
        assert_eq!(plan.resources.books, law.books);
        assert_eq!(plan.resources.courses, law.courses);
        assert_eq!(plan.resources.videos, law.video);
        assert_eq!(
            plan.study_timeline.year_1.courses,
            vec!["Introduction to Law", "Basic Principles"]
        );
        assert_eq!(plan.study_timeline.year_3.courses[0], "Advanced Law");
    }

    #[test]
    fn final_year_does_not_name_the_subject() {
        let timeline = StudyTimeline::for_subject("Medicine");
        assert_eq!(timeline.year_4.focus, "Specialization");
        assert_eq!(
            timeline.year_4.courses,
            vec!["Specialized Electives", "Capstone Project"]
        );
        assert_eq!(timeline.year_4.projects, vec!["Comprehensive capstone project"]);
    }

    #[test]
    fn serializes_with_year_keys() {
        let catalog = ReferenceCatalog::builtin();
        let plan = StudyPlan::assemble("CS", &catalog.subjects()[0]);
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(json["study_timeline"]["year_2"]["focus"], "Core Concepts");
        assert_eq!(
            json["study_timeline"]["year_2"]["projects"][0],
            "More complex application of concepts"
        );
        assert!(json["resources"]["videos"].is_string());
    }
}
