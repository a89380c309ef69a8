//! AI features: the remote generative-language variant, the local rule-engine
//! variant, and the adapter that chooses between them

pub mod assistant;
pub mod backend;
pub mod client;
pub mod error;
pub mod extract;
pub mod local;
pub mod remote;

pub use assistant::{Assistant, Resolved, Source};
pub use backend::AnalysisBackend;
pub use client::GeminiClient;
pub use error::AiError;
pub use local::LocalBackend;
pub use remote::RemoteBackend;
