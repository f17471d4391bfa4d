//! Assessment command and query handlers.

mod discard_assessment;
mod errors;
mod get_assessment;
mod start_assessment;
mod submit_answers;

pub use discard_assessment::{DiscardAssessmentCommand, DiscardAssessmentHandler};
pub use get_assessment::{GetAssessmentHandler, GetAssessmentQuery};
pub use start_assessment::{StartAssessmentCommand, StartAssessmentHandler};
pub use submit_answers::{SubmitAnswersCommand, SubmitAnswersHandler};
