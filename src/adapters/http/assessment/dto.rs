//! Data Transfer Objects for assessment HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{
    Assessment, AssessmentOutcome, AssessmentStage, InterestScores, Question, QuestionBank,
    TraitScores,
};
use crate::domain::catalog::FieldOfStudy;
use crate::domain::foundation::AssessmentId;
use crate::domain::matching::{CareerMatch, UniversityMatch};

// ════════════════════════════════════════════════════════════════════════════════
// Questionnaire
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: String,
    pub question: String,
    pub tag: String,
}

impl QuestionView {
    fn from_question<T>(question: &Question<T>, tag: &str) -> Self {
        Self {
            id: question.id.clone(),
            question: question.prompt.clone(),
            tag: tag.to_string(),
        }
    }
}

/// Both questionnaire sections, in presentation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireResponse {
    pub personality: Vec<QuestionView>,
    pub interests: Vec<QuestionView>,
}

impl From<&QuestionBank> for QuestionnaireResponse {
    fn from(bank: &QuestionBank) -> Self {
        Self {
            personality: bank
                .personality()
                .iter()
                .map(|q| QuestionView::from_question(q, q.tag.as_str()))
                .collect(),
            interests: bank
                .interests()
                .iter()
                .map(|q| QuestionView::from_question(q, q.tag.as_str()))
                .collect(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Assessment view
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct StartAssessmentResponse {
    pub assessment_id: String,
    pub stage: AssessmentStage,
}

impl From<&Assessment> for StartAssessmentResponse {
    fn from(assessment: &Assessment) -> Self {
        Self {
            assessment_id: assessment.id().to_string(),
            stage: assessment.stage(),
        }
    }
}

/// Progress view of an assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub assessment_id: String,
    pub stage: AssessmentStage,
    pub personality_answered: bool,
    pub interests_answered: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Assessment> for AssessmentResponse {
    fn from(assessment: &Assessment) -> Self {
        Self {
            assessment_id: assessment.id().to_string(),
            stage: assessment.stage(),
            personality_answered: assessment.personality_answers().is_some(),
            interests_answered: assessment.interest_answers().is_some(),
            created_at: assessment.created_at().to_rfc3339(),
            updated_at: assessment.updated_at().to_rfc3339(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Results
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct CareerRecommendationResponse {
    pub occupation: String,
    pub description: String,
    pub education_required: String,
    pub score: f64,
    pub trait_match: f64,
    pub interest_match: f64,
}

impl From<&CareerMatch> for CareerRecommendationResponse {
    fn from(m: &CareerMatch) -> Self {
        Self {
            occupation: m.occupation.name.clone(),
            description: m.occupation.description.clone(),
            education_required: m.occupation.education_required.clone(),
            score: m.score,
            trait_match: m.trait_match,
            interest_match: m.interest_match,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UniversityRecommendationResponse {
    pub university: String,
    pub location: String,
    pub programs: Vec<FieldOfStudy>,
    pub cost: u32,
    pub acceptance_rate: f64,
    pub graduation_rate: f64,
    pub score: f64,
    pub program_match: f64,
    pub cost_score: f64,
}

impl From<&UniversityMatch> for UniversityRecommendationResponse {
    fn from(m: &UniversityMatch) -> Self {
        let u = &m.university;
        Self {
            university: u.name.clone(),
            location: u.location.clone(),
            programs: u.programs.iter().copied().collect(),
            cost: u.cost,
            acceptance_rate: u.acceptance_rate,
            graduation_rate: u.graduation_rate,
            score: m.score,
            program_match: m.program_match,
            cost_score: m.cost_score,
        }
    }
}

/// Completed assessment results.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsResponse {
    pub assessment_id: String,
    pub trait_scores: TraitScores,
    pub interest_scores: InterestScores,
    pub career_recommendations: Vec<CareerRecommendationResponse>,
    pub university_recommendations: Vec<UniversityRecommendationResponse>,
    pub suggested_major: Option<String>,
}

impl ResultsResponse {
    pub fn new(id: AssessmentId, outcome: &AssessmentOutcome) -> Self {
        Self {
            assessment_id: id.to_string(),
            trait_scores: outcome.trait_scores.clone(),
            interest_scores: outcome.interest_scores.clone(),
            career_recommendations: outcome
                .recommendations
                .careers
                .iter()
                .map(CareerRecommendationResponse::from)
                .collect(),
            university_recommendations: outcome
                .recommendations
                .universities
                .iter()
                .map(UniversityRecommendationResponse::from)
                .collect(),
            suggested_major: outcome.suggested_major().map(str::to_string),
        }
    }
}
