//! Local variant: the deterministic rule engines from `migrantcare-core`

use std::convert::Infallible;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use migrantcare_core::{
    HealthInsight, PatientDataBundle, SymptomAnalysis, SymptomReport, chat, classifier, generator,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::backend::AnalysisBackend;

/// Runs the rule engines in-process. Never fails.
#[derive(Clone)]
pub struct LocalBackend {
    rng: Arc<Mutex<StdRng>>,
}

impl LocalBackend {
    /// Create a backend; a seed makes generic chat replies reproducible
    pub fn new(chat_seed: Option<u64>) -> Self {
        let rng = chat_seed
            .map(StdRng::seed_from_u64)
            .unwrap_or_else(StdRng::from_entropy);
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}

impl AnalysisBackend for LocalBackend {
    type Error = Infallible;

    async fn analyze_symptoms(
        &self,
        report: &SymptomReport,
    ) -> Result<SymptomAnalysis, Infallible> {
        tracing::debug!(
            symptom_count = report.symptoms.len(),
            age = ?report.age,
            gender = ?report.gender,
            "Running local symptom classifier"
        );
        Ok(classifier::classify(report))
    }

    async fn generate_insights(
        &self,
        bundle: &PatientDataBundle,
        now: DateTime<Utc>,
    ) -> Result<Vec<HealthInsight>, Infallible> {
        Ok(generator::generate(bundle, now))
    }

    async fn chat(&self, message: &str) -> Result<String, Infallible> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(chat::canned_reply(message, &mut *rng).to_string())
    }
}
