use thiserror::Error;

/// Input validation errors raised before the rule engines run
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("At least one symptom is required")]
    EmptySymptoms,

    #[error("Invalid patient age: {0}")]
    InvalidAge(u32),

    #[error("Message must not be empty")]
    EmptyMessage,
}
