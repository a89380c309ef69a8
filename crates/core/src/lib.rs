//! migrantcare-core: rule engines and shared types for the MigrantCare assistant
//!
//! Everything in this crate is pure and synchronous: the symptom classifier,
//! the insight generator, the keyword tables they read, the safe-default
//! records and the canned chat replies. The HTTP service in
//! `migrantcare-server` falls back to these when the remote model is
//! unavailable.

pub mod capability;
pub mod chat;
pub mod classifier;
pub mod error;
pub mod generator;
pub mod insight;
pub mod outcome;
pub mod patient;
pub mod symptom;
pub mod vocabulary;

// Re-export our types
pub use capability::{OperationInfo, ServiceInfo};
pub use error::CoreError;
pub use insight::{HealthInsight, InsightCategory, InsightType, Priority, sort_by_priority};
pub use outcome::{ErrorCode, ErrorOutcome};
pub use patient::{Appointment, Medication, PatientDataBundle, VitalsEntry};
pub use symptom::{Severity, SuggestedCondition, SymptomAnalysis, SymptomReport, Urgency};
