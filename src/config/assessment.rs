//! Assessment session configuration

use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentConfig {
    /// Minutes of inactivity after which an assessment expires
    #[serde(default = "default_session_ttl")]
    pub session_ttl_minutes: i64,
}

impl AssessmentConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.session_ttl_minutes <= 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        Ok(())
    }
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            session_ttl_minutes: default_session_ttl(),
        }
    }
}

fn default_session_ttl() -> i64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_ttl() {
        assert!(AssessmentConfig::default().validate().is_ok());

        let config = AssessmentConfig {
            session_ttl_minutes: 0,
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSessionTtl));
    }
}
