//! Assessment module - questionnaire, answers, aggregation and the
//! assessment aggregate.
//!
//! - `tags` - closed personality-trait and interest vocabularies
//! - `questions` - the fixed question bank
//! - `answers` - raw submitted answers
//! - `aggregator` - per-tag averaging
//! - `session` - the assessment aggregate and its stages

mod aggregator;
mod answers;
mod errors;
mod questions;
mod session;
mod tags;

pub use aggregator::{aggregate, InterestScores, ScoreMap, TraitScores};
pub use answers::AnswerSet;
pub use errors::AssessmentError;
pub use questions::{Question, QuestionBank, QuestionnaireSection};
pub use session::{Assessment, AssessmentOutcome, AssessmentStage};
pub use tags::{Interest, PersonalityTrait};
