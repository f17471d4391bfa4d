//! Closed sets of questionnaire tags.
//!
//! Occupations, questions and score maps all refer to these enums, so a
//! misspelled tag in reference data fails at load time instead of silently
//! never matching.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A personality dimension scored from the personality questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PersonalityTrait {
    #[serde(rename = "analytical")]
    Analytical,
    #[serde(rename = "creative")]
    Creative,
    #[serde(rename = "detail-oriented")]
    DetailOriented,
    #[serde(rename = "patient")]
    Patient,
    #[serde(rename = "communicative")]
    Communicative,
    #[serde(rename = "organized")]
    Organized,
    #[serde(rename = "persuasive")]
    Persuasive,
    #[serde(rename = "curious")]
    Curious,
    #[serde(rename = "technical")]
    Technical,
    #[serde(rename = "compassionate")]
    Compassionate,
}

impl PersonalityTrait {
    /// Every trait, in questionnaire order.
    pub const ALL: [PersonalityTrait; 10] = [
        PersonalityTrait::Analytical,
        PersonalityTrait::Creative,
        PersonalityTrait::DetailOriented,
        PersonalityTrait::Patient,
        PersonalityTrait::Communicative,
        PersonalityTrait::Organized,
        PersonalityTrait::Persuasive,
        PersonalityTrait::Curious,
        PersonalityTrait::Technical,
        PersonalityTrait::Compassionate,
    ];

    /// Returns the wire name of the trait.
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonalityTrait::Analytical => "analytical",
            PersonalityTrait::Creative => "creative",
            PersonalityTrait::DetailOriented => "detail-oriented",
            PersonalityTrait::Patient => "patient",
            PersonalityTrait::Communicative => "communicative",
            PersonalityTrait::Organized => "organized",
            PersonalityTrait::Persuasive => "persuasive",
            PersonalityTrait::Curious => "curious",
            PersonalityTrait::Technical => "technical",
            PersonalityTrait::Compassionate => "compassionate",
        }
    }
}

impl fmt::Display for PersonalityTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A subject-affinity dimension.
///
/// The last six variants only appear on occupations; no question scores
/// them, so they always contribute zero to a career match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Interest {
    #[serde(rename = "programming")]
    Programming,
    #[serde(rename = "mathematics")]
    Mathematics,
    #[serde(rename = "biology")]
    Biology,
    #[serde(rename = "chemistry")]
    Chemistry,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "business")]
    Business,
    #[serde(rename = "writing")]
    Writing,
    #[serde(rename = "technology")]
    Technology,
    #[serde(rename = "helping others")]
    HelpingOthers,
    #[serde(rename = "research")]
    Research,
    #[serde(rename = "problem-solving")]
    ProblemSolving,
    #[serde(rename = "statistics")]
    Statistics,
    #[serde(rename = "communication")]
    Communication,
    #[serde(rename = "mentoring")]
    Mentoring,
    #[serde(rename = "debate")]
    Debate,
    #[serde(rename = "organization")]
    Organization,
}

impl Interest {
    /// Returns the wire name of the interest.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Programming => "programming",
            Interest::Mathematics => "mathematics",
            Interest::Biology => "biology",
            Interest::Chemistry => "chemistry",
            Interest::Education => "education",
            Interest::Business => "business",
            Interest::Writing => "writing",
            Interest::Technology => "technology",
            Interest::HelpingOthers => "helping others",
            Interest::Research => "research",
            Interest::ProblemSolving => "problem-solving",
            Interest::Statistics => "statistics",
            Interest::Communication => "communication",
            Interest::Mentoring => "mentoring",
            Interest::Debate => "debate",
            Interest::Organization => "organization",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
