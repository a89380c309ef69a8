use serde::{Deserialize, Serialize};

/// Machine-readable error code carried in every error response
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCode {
    Invalid,
    Unauthorized,
    Throttled,
}

/// JSON envelope returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorOutcome {
    pub error: ErrorCode,
    pub message: String,
}

impl ErrorOutcome {
    pub fn new(error: ErrorCode, message: &str) -> Self {
        Self {
            error,
            message: message.to_string(),
        }
    }

    /// Create an outcome for a rejected request body
    pub fn invalid(message: &str) -> Self {
        Self::new(ErrorCode::Invalid, message)
    }

    /// Create an outcome for a missing or wrong API key
    pub fn unauthorized(message: &str) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Create an outcome for a rate-limited request
    pub fn throttled(message: &str) -> Self {
        Self::new(ErrorCode::Throttled, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_kebab_case_code() {
        let outcome = ErrorOutcome::invalid("At least one symptom is required");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["error"], "invalid");
        assert_eq!(json["message"], "At least one symptom is required");
    }
}
