//! AnswerScore value object for questionnaire answers (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A single questionnaire answer: 1 (not at all) to 5 (very much).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerScore(u8);

impl AnswerScore {
    /// Lowest accepted answer.
    pub const MIN: u8 = 1;

    /// Highest accepted answer.
    pub const MAX: u8 = 5;

    /// Creates an AnswerScore, returning error if out of range.
    pub fn try_new(field: &str, value: i64) -> Result<Self, ValidationError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(ValidationError::out_of_range(
                field,
                i64::from(Self::MIN),
                i64::from(Self::MAX),
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a float for averaging.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }
}

impl fmt::Display for AnswerScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_one_through_five() {
        for value in 1..=5 {
            assert_eq!(AnswerScore::try_new("q", value).unwrap().value() as i64, value);
        }
    }

    #[test]
    fn try_new_rejects_out_of_range_values() {
        assert!(AnswerScore::try_new("q", 0).is_err());
        assert!(AnswerScore::try_new("q", 6).is_err());
        assert!(AnswerScore::try_new("q", -3).is_err());
    }

    #[test]
    fn rejection_names_the_question() {
        let err = AnswerScore::try_new("curious", 9).unwrap_err();
        assert_eq!(err, ValidationError::out_of_range("curious", 1, 5, 9));
    }

    #[test]
    fn displays_against_scale() {
        assert_eq!(AnswerScore::try_new("q", 4).unwrap().to_string(), "4/5");
    }
}
