use thiserror::Error;

/// Failure of the remote generative-language path.
///
/// `Malformed` means the model's text came back but could not be read as the
/// requested JSON; the adapter answers those with a safe default. Every other
/// variant, including a service response that is not a valid
/// `generateContent` envelope, means the call failed and the local rule
/// engines take over.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("Remote AI is not configured")]
    NotConfigured,

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Generative API error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Invalid generative API response: {0}")]
    InvalidResponse(String),

    #[error("Malformed AI response: {0}")]
    Malformed(String),
}

impl AiError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, AiError::Malformed(_))
    }
}
