//! Engine errors
//!
//! The planners themselves never fail; these cover a caller handing over
//! something the engine cannot work with at all.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("recommendation request has no user profile")]
    MissingProfile,
    #[error("malformed recommendation request: {0}")]
    InvalidRequest(#[from] serde_json::Error),
    #[error("invalid clock reading {0:?}, expected RFC 3339")]
    InvalidClock(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EngineError::MissingProfile.to_string(),
            "recommendation request has no user profile"
        );
        assert_eq!(
            EngineError::InvalidClock("soon".to_string()).to_string(),
            "invalid clock reading \"soon\", expected RFC 3339"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let err: EngineError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("malformed recommendation request:"));
    }
}
