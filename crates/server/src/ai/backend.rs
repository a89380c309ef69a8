//! The interface shared by the remote and local analysis variants

use std::future::Future;

use chrono::{DateTime, Utc};
use migrantcare_core::{HealthInsight, PatientDataBundle, SymptomAnalysis, SymptomReport};

/// One way of answering assistant requests
pub trait AnalysisBackend {
    type Error;

    fn analyze_symptoms(
        &self,
        report: &SymptomReport,
    ) -> impl Future<Output = Result<SymptomAnalysis, Self::Error>> + Send;

    fn generate_insights(
        &self,
        bundle: &PatientDataBundle,
        now: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<HealthInsight>, Self::Error>> + Send;

    fn chat(&self, message: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
