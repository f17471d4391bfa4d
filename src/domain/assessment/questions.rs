//! The questionnaire: fixed personality and interest questions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::tags::{Interest, PersonalityTrait};

/// A single 1-5 scale question scoring one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question<T> {
    pub id: String,
    pub prompt: String,
    pub tag: T,
}

impl<T> Question<T> {
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, tag: T) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            tag,
        }
    }
}

/// Which half of the questionnaire a set of answers belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionnaireSection {
    Personality,
    Interests,
}

impl fmt::Display for QuestionnaireSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionnaireSection::Personality => f.write_str("personality"),
            QuestionnaireSection::Interests => f.write_str("interests"),
        }
    }
}

/// Immutable question bank, built once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    personality: Vec<Question<PersonalityTrait>>,
    interests: Vec<Question<Interest>>,
}

impl QuestionBank {
    pub fn new(
        personality: Vec<Question<PersonalityTrait>>,
        interests: Vec<Question<Interest>>,
    ) -> Self {
        Self {
            personality,
            interests,
        }
    }

    /// The standard ten personality and ten interest questions.
    pub fn standard() -> Self {
        use Interest as I;
        use PersonalityTrait as P;

        let personality = vec![
            Question::new("analytical", "Do you enjoy solving complex problems and puzzles?", P::Analytical),
            Question::new("creative", "Do you often come up with unique ideas or solutions?", P::Creative),
            Question::new("detail_oriented", "Do you pay close attention to details and notice small errors?", P::DetailOriented),
            Question::new("patient", "Are you patient when dealing with challenging situations?", P::Patient),
            Question::new("communicative", "Do you enjoy explaining concepts to others?", P::Communicative),
            Question::new("organized", "Do you prefer to have a structured plan for your activities?", P::Organized),
            Question::new("persuasive", "Are you good at convincing others of your point of view?", P::Persuasive),
            Question::new("curious", "Do you often seek to learn new things out of curiosity?", P::Curious),
            Question::new("technical", "Do you enjoy working with technology and learning how things work?", P::Technical),
            Question::new("compassionate", "Do you feel strongly about helping others in need?", P::Compassionate),
        ];

        let interests = vec![
            Question::new("programming", "How much do you enjoy programming or coding?", I::Programming),
            Question::new("mathematics", "How interested are you in mathematics and statistical analysis?", I::Mathematics),
            Question::new("biology", "How interested are you in biology and life sciences?", I::Biology),
            Question::new("chemistry", "How interested are you in chemistry and chemical processes?", I::Chemistry),
            Question::new("education", "How much do you enjoy teaching or explaining concepts to others?", I::Education),
            Question::new("business", "How interested are you in business and entrepreneurship?", I::Business),
            Question::new("writing", "How much do you enjoy writing and communication?", I::Writing),
            Question::new("technology", "How interested are you in technology and its applications?", I::Technology),
            Question::new("helping_others", "How important is it for you to directly help others in your career?", I::HelpingOthers),
            Question::new("research", "How much do you enjoy conducting research and investigation?", I::Research),
        ];

        Self::new(personality, interests)
    }

    pub fn personality(&self) -> &[Question<PersonalityTrait>] {
        &self.personality
    }

    pub fn interests(&self) -> &[Question<Interest>] {
        &self.interests
    }

    /// Question ids belonging to a section, in questionnaire order.
    pub fn question_ids(&self, section: QuestionnaireSection) -> Vec<&str> {
        match section {
            QuestionnaireSection::Personality => {
                self.personality.iter().map(|q| q.id.as_str()).collect()
            }
            QuestionnaireSection::Interests => {
                self.interests.iter().map(|q| q.id.as_str()).collect()
            }
        }
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}
